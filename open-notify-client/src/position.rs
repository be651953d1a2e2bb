use restson::{Error, RestPath};
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct Position {
    pub message: String,
    /// Unix epoch seconds at which the position was observed.
    pub timestamp: i64,
    pub iss_position: Coordinates,
}

impl RestPath<()> for Position {
    fn get_path(_: ()) -> Result<String, Error> {
        Ok(String::from("/iss-now.json"))
    }
}

/// The API serves both coordinates as decimal strings; they are kept
/// verbatim so callers can display them without reformatting.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_iss_now_json() {
        assert_eq!(Position::get_path(()).unwrap(), "/iss-now.json");
    }

    #[test]
    fn deserializes_iss_now_payload() {
        let body = r#"{
            "message": "success",
            "timestamp": 1594819923,
            "iss_position": {"latitude": "-24.2464", "longitude": "-86.0892"}
        }"#;

        let position: Position = serde_json::from_str(body).unwrap();
        assert_eq!(position.timestamp, 1594819923);
        assert_eq!(position.iss_position.latitude, "-24.2464");
        assert_eq!(position.iss_position.longitude, "-86.0892");
    }
}
