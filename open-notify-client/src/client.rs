use restson::blocking::RestClient;
use restson::{Error, Response};

use crate::{AstronautList, PassFilter, PassList, Position};

/// Entry point for talking to an Open Notify server, usually
/// `http://api.open-notify.org`. All calls block until the server answers
/// or the underlying client gives up.
pub struct Client {
    client: RestClient,
}

impl Client {
    pub fn new(url: &str) -> Result<Self, Error> {
        let client = restson::RestClient::new_blocking(url)?;
        Ok(Client { client })
    }

    /// Everybody currently in space and the craft they are aboard.
    pub fn astronauts(&mut self) -> Result<AstronautList, Error> {
        let astronauts: Response<AstronautList> = self.client.get(())?;
        Ok(astronauts.into_inner())
    }

    /// The station's ground position at the time of the request.
    pub fn position(&mut self) -> Result<Position, Error> {
        let position: Response<Position> = self.client.get(())?;
        Ok(position.into_inner())
    }

    /// Upcoming passes over the ground location described by `filter`.
    pub fn passes(&mut self, filter: &PassFilter) -> Result<PassList, Error> {
        let filter: Vec<_> = filter.into();
        let passes: Response<PassList> = self.client.get_with((), &filter)?;
        Ok(passes.into_inner())
    }
}
