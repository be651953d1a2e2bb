use restson::{Error, RestPath};
use serde_derive::{Deserialize, Serialize};

/// Query parameters for the pass prediction endpoint. `lat` and `lon` are
/// mandatory, the number of passes is optional (the server defaults to 5).
#[derive(Default)]
pub struct PassFilter {
    lat: String,
    lon: String,
    n: String,
}

impl PassFilter {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        PassFilter {
            lat: format!("{}", lat_deg),
            lon: format!("{}", lon_deg),
            n: String::new(),
        }
    }

    pub fn number(mut self, n: u32) -> Self {
        self.n = format!("{}", n);
        self
    }
}

impl<'a> From<&'a PassFilter> for Vec<(&'a str, &'a str)> {
    fn from(filter: &'a PassFilter) -> Vec<(&'a str, &'a str)> {
        let mut params = vec![
            ("lat", filter.lat.as_str()),
            ("lon", filter.lon.as_str()),
        ];

        if !filter.n.is_empty() {
            params.push(("n", filter.n.as_str()));
        }
        params
    }
}

#[derive(Deserialize, Debug)]
pub struct PassList {
    pub message: String,
    pub request: PassRequest,
    pub response: Vec<Pass>,
}

impl RestPath<()> for PassList {
    fn get_path(_: ()) -> Result<String, Error> {
        Ok(String::from("/iss-pass.json"))
    }
}

/// Echo of the requested prediction, resolved by the server.
#[derive(Deserialize, Debug)]
pub struct PassRequest {
    pub altitude: f64,
    pub datetime: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub passes: u32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Pass {
    /// Unix epoch seconds at which the station rises above the horizon.
    pub risetime: i64,
    /// Seconds the station stays above the horizon.
    pub duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_iss_pass_json() {
        assert_eq!(PassList::get_path(()).unwrap(), "/iss-pass.json");
    }

    #[test]
    fn filter_renders_lat_lon_and_count() {
        let filter = PassFilter::new(39.7683333, -86.1580556).number(1);
        let params: Vec<_> = (&filter).into();
        assert_eq!(
            params,
            vec![("lat", "39.7683333"), ("lon", "-86.1580556"), ("n", "1")]
        );
    }

    #[test]
    fn filter_omits_count_unless_set() {
        let filter = PassFilter::new(50.0, 8.5);
        let params: Vec<_> = (&filter).into();
        assert_eq!(params, vec![("lat", "50"), ("lon", "8.5")]);
    }

    #[test]
    fn deserializes_iss_pass_payload() {
        let body = r#"{
            "message": "success",
            "request": {
                "altitude": 100,
                "datetime": 1588269076,
                "latitude": 39.7683333,
                "longitude": -86.1580556,
                "passes": 1
            },
            "response": [
                {"duration": 645, "risetime": 1588295665}
            ]
        }"#;

        let list: PassList = serde_json::from_str(body).unwrap();
        assert_eq!(list.request.passes, 1);
        assert_eq!(list.response.len(), 1);
        assert_eq!(list.response[0].risetime, 1588295665);
        assert_eq!(list.response[0].duration, 645);
    }
}
