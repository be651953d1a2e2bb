use anyhow::Result;
use clap::{CommandFactory, Parser};

mod dispatch;
mod error;
mod event;
mod fetch;
mod logger;
mod map;
mod report;
mod station;

use self::dispatch::Actions;
use self::fetch::OpenNotify;
use self::map::TerminalMap;

/// Reports on the International Space Station: who is aboard, where it is,
/// and when it next passes over Indianapolis.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, max_term_width = 100)]
struct Cli {
    /// Show the astronauts currently in space and their spacecraft
    #[arg(short, long)]
    astronauts: bool,

    /// Show the station's current position
    #[arg(short, long)]
    location: bool,

    /// Show the station on a world map (dismiss with q or a mouse click)
    #[arg(short, long)]
    map: bool,

    /// Show the world map plus the next pass over Indianapolis
    #[arg(short, long)]
    indy: bool,

    /// Sets the level of log verbosity
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbosity: u8,
}

impl Cli {
    fn actions(&self) -> Actions {
        Actions {
            astronauts: self.astronauts,
            location: self.location,
            map: self.map,
            map_with_pass: self.indy,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    log::set_boxed_logger(Box::new(logger::Logger))?;
    log::set_max_level(match cli.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });

    let actions = cli.actions();
    if !actions.any() {
        // nothing requested: help only, no network traffic
        Cli::command().print_help()?;
        return Ok(());
    }

    let mut fetch = OpenNotify::new(fetch::API_URL)?;
    let mut plot = TerminalMap;
    let outcome = dispatch::run(actions, &mut fetch, &mut plot, &mut std::io::stdout())?;

    if outcome.any_failed() {
        std::process::exit(1);
    }

    Ok(())
}
