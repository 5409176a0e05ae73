use std::sync::Arc;

use serde::Serialize;

use crate::domain::schedule::{readable, MusterConfiguration};
use crate::repository::errors::FindError;
use crate::repository::Repository;

pub struct Request {
    pub org_id: u32,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub org_id: u32,
    pub default_muster_configuration: Vec<MusterConfiguration>,
    pub summary: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Response, Error> {
    let org = match repo.find_org(req.org_id).await {
        Err(err) => {
            return match err {
                FindError::NotFound => Err(Error::NotFound),
                FindError::Unknown => Err(Error::Unknown),
            }
        }
        Ok(org) => org,
    };

    Ok(Response {
        org_id: org.id,
        summary: org
            .default_muster_configuration
            .iter()
            .map(readable::describe)
            .collect(),
        default_muster_configuration: org.default_muster_configuration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::InMemoryRepository;

    #[tokio::test]
    async fn it_should_return_the_default_muster_of_the_org() {
        let repo = Arc::new(InMemoryRepository::new());
        let org = mocks::insert_mock_org(repo.as_ref()).await;

        let result = execute(repo.clone(), Request { org_id: org.id }).await;

        match result {
            Ok(response) => {
                assert_eq!(response.default_muster_configuration, mocks::mock_musters());
                assert_eq!(
                    response.summary[0],
                    "Weekdays at 9:00 for 1 hour (America/New_York)"
                );
            }
            Err(err) => unreachable!("default muster must be found: {:?}", err),
        }
    }

    #[tokio::test]
    async fn it_should_return_not_found_for_an_unknown_org() {
        let repo = Arc::new(InMemoryRepository::new());

        let result = execute(repo, Request { org_id: 42 }).await;

        assert_eq!(result, Err(Error::NotFound));
    }
}
