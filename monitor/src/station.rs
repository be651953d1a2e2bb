use chrono::{DateTime, Local, LocalResult, TimeZone};
use open_notify_client::{Pass, Position};

use crate::error::Error;

/// Observation time as shown in the location report.
pub const POSITION_TIME_FORMAT: &str = "%B %d, %Y *** %I:%M:%S %p";

/// Rise time as shown in the pass overlay on the map.
pub const PASS_TIME_FORMAT: &str = "%m/%d/%y %I:%M %p";

/// The station's ground position at one instant. The coordinate strings are
/// kept verbatim from the API for the text report; the parsed degrees feed
/// the map.
#[derive(Clone, Debug)]
pub struct StationPosition {
    pub latitude: String,
    pub longitude: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub time: String,
}

impl StationPosition {
    pub fn from_wire(wire: Position) -> Result<Self, Error> {
        let lat_deg = parse_coordinate("latitude", &wire.iss_position.latitude, 90.0)?;
        let lon_deg = parse_coordinate("longitude", &wire.iss_position.longitude, 180.0)?;

        Ok(StationPosition {
            time: local_time(wire.timestamp)?
                .format(POSITION_TIME_FORMAT)
                .to_string(),
            latitude: wire.iss_position.latitude,
            longitude: wire.iss_position.longitude,
            lat_deg,
            lon_deg,
        })
    }
}

/// The next predicted pass over a ground location.
#[derive(Clone, Debug)]
pub struct PassPrediction {
    pub rise_time: String,
}

impl PassPrediction {
    pub fn from_wire(pass: &Pass) -> Result<Self, Error> {
        Ok(PassPrediction {
            rise_time: local_time(pass.risetime)?.format(PASS_TIME_FORMAT).to_string(),
        })
    }
}

fn local_time(epoch: i64) -> Result<DateTime<Local>, Error> {
    match Local.timestamp_opt(epoch, 0) {
        LocalResult::Single(time) => Ok(time),
        // DST fold; both readings are valid wall clock times
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(Error::DataFormat(format!(
            "timestamp {} is not a valid time",
            epoch
        ))),
    }
}

fn parse_coordinate(name: &str, value: &str, limit_deg: f64) -> Result<f64, Error> {
    let deg: f64 = value.parse().map_err(|_| {
        Error::DataFormat(format!("{} {:?} is not a decimal number", name, value))
    })?;

    if deg.abs() > limit_deg {
        log::warn!("{} {} is outside +-{}", name, deg, limit_deg);
    }
    Ok(deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use open_notify_client::Coordinates;

    #[test]
    fn position_time_format() {
        let time = Utc.timestamp_opt(1588295665, 0).unwrap();
        assert_eq!(
            time.format(POSITION_TIME_FORMAT).to_string(),
            "May 01, 2020 *** 01:14:25 AM"
        );
    }

    #[test]
    fn pass_time_format() {
        let time = Utc.timestamp_opt(1588295665, 0).unwrap();
        assert_eq!(time.format(PASS_TIME_FORMAT).to_string(), "05/01/20 01:14 AM");
    }

    #[test]
    fn keeps_coordinate_strings_verbatim() {
        let position = StationPosition::from_wire(Position {
            message: "success".into(),
            timestamp: 1588295665,
            iss_position: Coordinates {
                latitude: "51.1000".into(),
                longitude: "-12.30".into(),
            },
        })
        .unwrap();

        assert_eq!(position.latitude, "51.1000");
        assert_eq!(position.longitude, "-12.30");
        assert!((position.lat_deg - 51.1).abs() < 1e-9);
        assert!((position.lon_deg - -12.3).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        let err = StationPosition::from_wire(Position {
            message: "success".into(),
            timestamp: 1588295665,
            iss_position: Coordinates {
                latitude: "fifty one".into(),
                longitude: "-12.30".into(),
            },
        })
        .unwrap_err();

        assert!(matches!(err, Error::DataFormat(_)));
    }
}
