use restson::{Error, RestPath};
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct AstronautList {
    pub message: String,
    pub number: u32,
    pub people: Vec<Astronaut>,
}

impl RestPath<()> for AstronautList {
    fn get_path(_: ()) -> Result<String, Error> {
        Ok(String::from("/astros.json"))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Astronaut {
    pub name: String,
    pub craft: String,
}
