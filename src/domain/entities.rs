use serde::{Deserialize, Serialize};

use super::schedule::MusterConfiguration;

pub trait HasId {
    fn set_id(&mut self, id: u32);
    fn get_id(&self) -> u32;
}

/// An organization and its default muster requirements.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Org {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub default_muster_configuration: Vec<MusterConfiguration>,
}

impl HasId for Org {
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn get_id(&self) -> u32 {
        self.id
    }
}

/// A unit of an organization. Without its own configuration it follows the
/// organization's default muster.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Unit {
    pub id: u32,
    pub org: u32,
    pub name: String,
    #[serde(default)]
    pub muster_configuration: Option<Vec<MusterConfiguration>>,
}

impl Unit {
    pub fn uses_default_muster(&self) -> bool {
        self.muster_configuration.is_none()
    }
}

impl HasId for Unit {
    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn get_id(&self) -> u32 {
        self.id
    }
}
