use std::io::{self, Write};

use log::error;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::map::Plot;
use crate::report;

/// Pass predictions are always requested for this spot in Indianapolis, IN.
pub const REFERENCE_CITY: (f64, f64) = (39.7683333, -86.1580556);

pub const MAP_CONFLICT_MESSAGE: &str = "I CAN ONLY SHOW YOU ONE MAP AT A TIME";

/// What the user asked for, resolved from the CLI flags and passed by value
/// into [`run`]. The two map variants are mutually exclusive; everything
/// else combines freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Actions {
    pub astronauts: bool,
    pub location: bool,
    pub map: bool,
    pub map_with_pass: bool,
}

impl Actions {
    pub fn any(&self) -> bool {
        self.astronauts || self.location || self.map || self.map_with_pass
    }
}

#[derive(Default)]
pub struct Outcome {
    pub failures: Vec<Error>,
}

impl Outcome {
    pub fn any_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    fn record(&mut self, action: &str, err: Error) {
        error!("{}: {}", action, err);
        self.failures.push(err);
    }
}

/// Runs the requested actions in their fixed order: crew report, location
/// report, then at most one map. Every action fetches on its own; a failure
/// is surfaced through the logger and the remaining actions still run.
pub fn run<F, P, W>(actions: Actions, fetch: &mut F, plot: &mut P, out: &mut W) -> io::Result<Outcome>
where
    F: Fetch,
    P: Plot,
    W: Write,
{
    let mut outcome = Outcome::default();

    if actions.astronauts {
        match fetch.astronauts() {
            Ok(astronauts) => out.write_all(report::astronaut_report(&astronauts).as_bytes())?,
            Err(err) => outcome.record("astronaut report", err),
        }
    }

    if actions.location {
        match fetch.station_position() {
            Ok(position) => out.write_all(report::location_report(&position).as_bytes())?,
            Err(err) => outcome.record("location report", err),
        }
    }

    if actions.map && actions.map_with_pass {
        writeln!(out, "{}", MAP_CONFLICT_MESSAGE)?;
    } else if actions.map {
        let shown = fetch
            .station_position()
            .and_then(|position| plot.world_map(&position));
        if let Err(err) = shown {
            outcome.record("map", err);
        }
    } else if actions.map_with_pass {
        let (lat_deg, lon_deg) = REFERENCE_CITY;
        let shown = fetch.station_position().and_then(|position| {
            let pass = fetch.next_pass(lat_deg, lon_deg)?;
            plot.world_map_with_pass(&position, &pass)
        });
        if let Err(err) = shown {
            outcome.record("map", err);
        }
    }

    Ok(outcome)
}
