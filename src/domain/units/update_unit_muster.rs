use std::sync::Arc;

use serde::Serialize;

use crate::domain::helpers::muster::check_musters;
use crate::domain::schedule::MusterConfiguration;
use crate::repository::errors::UpdateError;
use crate::repository::Repository;

pub struct Request {
    pub org_id: u32,
    pub unit_id: u32,
    /// `None` drops the override so the unit follows the default again.
    pub muster_configuration: Option<Vec<MusterConfiguration>>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub unit_id: u32,
    pub muster_configuration: Option<Vec<MusterConfiguration>>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    BadRequest(String),
    NotFound,
    Unknown,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    if let Some(musters) = &req.muster_configuration {
        check_musters(musters).map_err(|message| {
            log::debug!("rejected muster for unit {}: {}", req.unit_id, message);
            Error::BadRequest(message)
        })?;
    }

    match repo
        .update_unit_muster(req.org_id, req.unit_id, req.muster_configuration)
        .await
    {
        Ok(unit) => {
            log::info!(
                "unit {} of org {} muster replaced (override: {})",
                unit.id,
                unit.org,
                !unit.uses_default_muster()
            );
            Ok(Response {
                unit_id: unit.id,
                muster_configuration: unit.muster_configuration,
            })
        }
        Err(err) => Err(match err {
            UpdateError::NotFound => Error::NotFound,
            UpdateError::Unknown => Error::Unknown,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::domain::schedule::DaysOfTheWeek;
    use crate::repository::InMemoryRepository;

    #[tokio::test]
    async fn it_should_set_an_override() {
        let repo = Arc::new(InMemoryRepository::new());
        let org = mocks::insert_mock_org(repo.as_ref()).await;
        let unit = mocks::insert_mock_unit(repo.as_ref(), org.id).await;
        let musters = vec![mocks::mock_muster(DaysOfTheWeek::SATURDAY, "20:00", 240)];

        let result = execute(
            repo.clone(),
            Request {
                org_id: org.id,
                unit_id: unit.id,
                muster_configuration: Some(musters.clone()),
            },
        )
        .await;

        assert_eq!(
            result,
            Ok(Response {
                unit_id: unit.id,
                muster_configuration: Some(musters),
            })
        );
    }

    #[tokio::test]
    async fn it_should_clear_an_override() {
        let repo = Arc::new(InMemoryRepository::new());
        let org = mocks::insert_mock_org(repo.as_ref()).await;
        let unit = mocks::insert_named_unit(
            repo.as_ref(),
            org.id,
            "Bravo Unit",
            Some(mocks::mock_musters()),
        )
        .await;

        let result = execute(
            repo.clone(),
            Request {
                org_id: org.id,
                unit_id: unit.id,
                muster_configuration: None,
            },
        )
        .await;

        match result {
            Ok(response) => assert_eq!(response.muster_configuration, None),
            Err(err) => unreachable!("override must be cleared: {:?}", err),
        }
    }

    #[tokio::test]
    async fn it_should_reject_overlapping_windows() {
        let repo = Arc::new(InMemoryRepository::new());
        let org = mocks::insert_mock_org(repo.as_ref()).await;
        let unit = mocks::insert_mock_unit(repo.as_ref(), org.id).await;

        let result = execute(
            repo.clone(),
            Request {
                org_id: org.id,
                unit_id: unit.id,
                muster_configuration: Some(vec![
                    mocks::mock_muster(DaysOfTheWeek::MONDAY, "9:00", 60),
                    mocks::mock_muster(DaysOfTheWeek::MONDAY, "9:30", 30),
                ]),
            },
        )
        .await;

        assert_eq!(
            result,
            Err(Error::BadRequest(
                "Muster window 9:00-10:00 (America/New_York) overlaps with muster window 9:30-10:00 (America/New_York).".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn it_should_return_not_found_for_an_unknown_unit() {
        let repo = Arc::new(InMemoryRepository::new());
        let org = mocks::insert_mock_org(repo.as_ref()).await;

        let result = execute(
            repo,
            Request {
                org_id: org.id,
                unit_id: 99,
                muster_configuration: None,
            },
        )
        .await;

        assert_eq!(result, Err(Error::NotFound));
    }
}
