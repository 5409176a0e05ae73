use std::sync::Arc;

use serde::Serialize;

use crate::domain::dtos::ListResponse;
use crate::repository::errors::{FindAllError, FindError};
use crate::repository::Repository;

pub struct Request {
    pub org_id: u32,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Response {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

/// Lists the units that follow the organization's default muster.
pub async fn execute(
    repo: Arc<dyn Repository>,
    req: Request,
) -> Result<ListResponse<Response>, Error> {
    if let Err(err) = repo.find_org(req.org_id).await {
        return Err(match err {
            FindError::NotFound => Error::NotFound,
            FindError::Unknown => Error::Unknown,
        });
    }

    let units = match repo.find_units(req.org_id).await {
        Err(err) => {
            return match err {
                FindAllError::Unknown => Err(Error::Unknown),
            }
        }
        Ok(units) => units,
    };

    Ok(ListResponse::new(
        units
            .into_iter()
            .filter(|unit| unit.uses_default_muster())
            .map(|unit| Response {
                id: unit.id,
                name: unit.name,
            })
            .collect(),
    ))
}
