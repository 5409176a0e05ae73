use std::sync::Arc;

use serde::Serialize;

use crate::domain::schedule::MusterConfiguration;
use crate::repository::errors::FindError;
use crate::repository::Repository;

pub struct Request {
    pub org_id: u32,
    pub unit_id: u32,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub unit_id: u32,
    pub name: String,
    /// The unit's own schedule, absent when it follows the default.
    pub muster_configuration: Option<Vec<MusterConfiguration>>,
    /// The schedule the unit is held to.
    pub effective_muster_configuration: Vec<MusterConfiguration>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

impl From<FindError> for Error {
    fn from(value: FindError) -> Self {
        match value {
            FindError::NotFound => Error::NotFound,
            FindError::Unknown => Error::Unknown,
        }
    }
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    let unit = repo.find_unit(req.org_id, req.unit_id).await?;

    let effective_muster_configuration = match &unit.muster_configuration {
        Some(musters) => musters.clone(),
        None => repo.find_org(req.org_id).await?.default_muster_configuration,
    };

    Ok(Response {
        unit_id: unit.id,
        name: unit.name,
        muster_configuration: unit.muster_configuration,
        effective_muster_configuration,
    })
}
