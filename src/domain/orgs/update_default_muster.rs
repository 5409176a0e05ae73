use std::sync::Arc;

use serde::Serialize;

use crate::domain::helpers::muster::check_musters;
use crate::domain::schedule::MusterConfiguration;
use crate::repository::errors::UpdateError;
use crate::repository::Repository;

pub struct Request {
    pub org_id: u32,
    pub default_muster_configuration: Vec<MusterConfiguration>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub org_id: u32,
    pub default_muster_configuration: Vec<MusterConfiguration>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    BadRequest(String),
    NotFound,
    Unknown,
}

/// Replaces the whole default muster of an organization.
pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    check_musters(&req.default_muster_configuration).map_err(|message| {
        log::debug!("rejected default muster for org {}: {}", req.org_id, message);
        Error::BadRequest(message)
    })?;

    match repo
        .update_default_muster(req.org_id, req.default_muster_configuration)
        .await
    {
        Ok(org) => {
            log::info!(
                "org {} default muster replaced with {} windows",
                org.id,
                org.default_muster_configuration.len()
            );
            Ok(Response {
                org_id: org.id,
                default_muster_configuration: org.default_muster_configuration,
            })
        }
        Err(err) => Err(match err {
            UpdateError::NotFound => Error::NotFound,
            UpdateError::Unknown => Error::Unknown,
        }),
    }
}
