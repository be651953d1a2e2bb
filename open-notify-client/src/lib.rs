//! Blocking client for the [Open Notify](http://open-notify.org) API, which
//! serves near-real-time data about the International Space Station: the
//! people currently in space, the station's ground position and upcoming
//! passes over a ground location.

mod astronauts;
mod client;
mod passes;
mod position;

pub use crate::astronauts::{Astronaut, AstronautList};
pub use crate::client::Client;
pub use crate::passes::{Pass, PassFilter, PassList, PassRequest};
pub use crate::position::{Coordinates, Position};
