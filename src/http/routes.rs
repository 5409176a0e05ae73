use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::domain::dtos::ListResponse;
use crate::domain::orgs::{find_affected_units, find_default_muster, update_default_muster};
use crate::domain::schedule::MusterConfiguration;
use crate::domain::timezone::{Timezone, TimezoneOption};
use crate::domain::units::{find_unit_muster, update_unit_muster};

use super::error::ApiError;
use super::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DefaultMusterBody {
    pub default_muster_configuration: Vec<MusterConfiguration>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UnitMusterBody {
    #[serde(default)]
    pub muster_configuration: Option<Vec<MusterConfiguration>>,
}

pub async fn find_default_muster(
    Path(org_id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<find_default_muster::Response>, ApiError> {
    let response =
        find_default_muster::execute(state.repo.clone(), find_default_muster::Request { org_id })
            .await?;
    Ok(Json(response))
}

pub async fn update_default_muster(
    Path(org_id): Path<u32>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DefaultMusterBody>, JsonRejection>,
) -> Result<Json<update_default_muster::Response>, ApiError> {
    let Json(body) = payload?;
    let response = update_default_muster::execute(
        state.repo.clone(),
        update_default_muster::Request {
            org_id,
            default_muster_configuration: body.default_muster_configuration,
        },
    )
    .await?;
    Ok(Json(response))
}

pub async fn find_affected_units(
    Path(org_id): Path<u32>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<find_affected_units::Response>>, ApiError> {
    let response =
        find_affected_units::execute(state.repo.clone(), find_affected_units::Request { org_id })
            .await?;
    Ok(Json(response))
}

pub async fn find_unit_muster(
    Path((org_id, unit_id)): Path<(u32, u32)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<find_unit_muster::Response>, ApiError> {
    let response = find_unit_muster::execute(
        state.repo.clone(),
        find_unit_muster::Request { org_id, unit_id },
    )
    .await?;
    Ok(Json(response))
}

pub async fn update_unit_muster(
    Path((org_id, unit_id)): Path<(u32, u32)>,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UnitMusterBody>, JsonRejection>,
) -> Result<Json<update_unit_muster::Response>, ApiError> {
    let Json(body) = payload?;
    let response = update_unit_muster::execute(
        state.repo.clone(),
        update_unit_muster::Request {
            org_id,
            unit_id,
            muster_configuration: body.muster_configuration,
        },
    )
    .await?;
    Ok(Json(response))
}

pub async fn find_timezones() -> Json<Vec<TimezoneOption>> {
    Json(Timezone::options())
}
