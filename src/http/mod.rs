use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{routing, Router, Server};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::repository::{self, Repository};

mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn router(repo: Arc<dyn Repository>) -> Router {
    Router::new()
        .route(
            "/api/org/:org_id/default-muster",
            routing::get(routes::find_default_muster).put(routes::update_default_muster),
        )
        .route(
            "/api/org/:org_id/default-muster/units",
            routing::get(routes::find_affected_units),
        )
        .route(
            "/api/unit/:org_id/:unit_id/muster",
            routing::get(routes::find_unit_muster).put(routes::update_unit_muster),
        )
        .route("/api/timezones", routing::get(routes::find_timezones))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { repo }))
}

pub async fn serve(config: Config) -> Result<()> {
    log::info!(
        "Connecting to database {}/{}",
        config.database_url,
        config.database_name
    );

    let repo = Arc::new(
        repository::MongoDbRepository::new(
            &config.database_url,
            &config.database_name,
            config.database_pool_size,
        )
        .await?,
    );

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("Listening on port {}", config.port);

    Server::bind(&address)
        .serve(router(repo).into_make_service())
        .await?;

    Ok(())
}
