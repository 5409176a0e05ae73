use crate::domain::entities::{Org, Unit};
use crate::domain::schedule::{DaysOfTheWeek, MusterConfiguration};
use crate::helpers::time::parse_start_time;
use crate::repository::Repository;

pub fn mock_muster(days: DaysOfTheWeek, start: &str, minutes: u32) -> MusterConfiguration {
    MusterConfiguration {
        days,
        start_time: parse_start_time(start).expect("mock start time must be valid"),
        timezone: "America/New_York".to_string(),
        duration_minutes: minutes,
    }
}

pub fn mock_musters() -> Vec<MusterConfiguration> {
    vec![
        mock_muster(DaysOfTheWeek::WEEKDAYS, "9:00", 60),
        mock_muster(DaysOfTheWeek::WEEKENDS, "10:00", 120),
    ]
}

pub fn mock_org() -> Org {
    Org {
        id: 0,
        name: "Space Force".to_string(),
        default_muster_configuration: mock_musters(),
    }
}

pub fn mock_unit(org: u32) -> Unit {
    Unit {
        id: 0,
        org,
        name: "Alpha Unit".to_string(),
        muster_configuration: None,
    }
}

pub async fn insert_mock_org(repo: &dyn Repository) -> Org {
    match repo.insert_org(mock_org()).await {
        Ok(org) => org,
        _ => unreachable!("org must be created for this test"),
    }
}

pub async fn insert_mock_unit(repo: &dyn Repository, org: u32) -> Unit {
    insert_named_unit(repo, org, "Alpha Unit", None).await
}

pub async fn insert_named_unit(
    repo: &dyn Repository,
    org: u32,
    name: &str,
    muster_configuration: Option<Vec<MusterConfiguration>>,
) -> Unit {
    let unit = Unit {
        name: name.to_string(),
        muster_configuration,
        ..mock_unit(org)
    };
    match repo.insert_unit(unit).await {
        Ok(unit) => unit,
        _ => unreachable!("unit must be created for this test"),
    }
}
