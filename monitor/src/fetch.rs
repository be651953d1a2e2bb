use open_notify_client::{Astronaut, Client, PassFilter};

use crate::error::Error;
use crate::station::{PassPrediction, StationPosition};

pub const API_URL: &str = "http://api.open-notify.org";

/// The three Open Notify operations the dispatcher may need. Narrow on
/// purpose so tests can substitute canned data for the network.
pub trait Fetch {
    fn astronauts(&mut self) -> Result<Vec<Astronaut>, Error>;
    fn station_position(&mut self) -> Result<StationPosition, Error>;
    fn next_pass(&mut self, lat_deg: f64, lon_deg: f64) -> Result<PassPrediction, Error>;
}

pub struct OpenNotify {
    client: Client,
}

impl OpenNotify {
    pub fn new(url: &str) -> Result<Self, Error> {
        Ok(OpenNotify {
            client: Client::new(url)?,
        })
    }
}

impl Fetch for OpenNotify {
    fn astronauts(&mut self) -> Result<Vec<Astronaut>, Error> {
        Ok(self.client.astronauts()?.people)
    }

    fn station_position(&mut self) -> Result<StationPosition, Error> {
        StationPosition::from_wire(self.client.position()?)
    }

    fn next_pass(&mut self, lat_deg: f64, lon_deg: f64) -> Result<PassPrediction, Error> {
        let filter = PassFilter::new(lat_deg, lon_deg).number(1);
        let passes = self.client.passes(&filter)?;
        let pass = passes
            .response
            .first()
            .ok_or_else(|| Error::DataFormat("empty pass prediction response".into()))?;

        PassPrediction::from_wire(pass)
    }
}
