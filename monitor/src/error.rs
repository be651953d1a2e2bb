use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection failure, timeout or a non-2xx answer from the API.
    #[error("network error: {0}")]
    Network(restson::Error),

    /// The endpoint answered but the body didn't hold the expected fields.
    #[error("unexpected response data: {0}")]
    DataFormat(String),

    /// The terminal could not be prepared or drawn to. Map actions only.
    #[error("map rendering failed: {0}")]
    Render(#[from] io::Error),
}

impl From<restson::Error> for Error {
    fn from(err: restson::Error) -> Self {
        match err {
            err @ restson::Error::DeserializeParseError(..) => {
                Error::DataFormat(err.to_string())
            }
            err => Error::Network(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_failures_are_data_format_errors() {
        let parse_err = serde_json::from_str::<u32>("[]").unwrap_err();
        let err: Error = restson::Error::DeserializeParseError(parse_err, "[]".into()).into();
        assert!(matches!(err, Error::DataFormat(_)));
    }

    #[test]
    fn http_failures_are_network_errors() {
        let err: Error = restson::Error::HttpError(502, "bad gateway".into()).into();
        assert!(matches!(err, Error::Network(_)));
    }
}
