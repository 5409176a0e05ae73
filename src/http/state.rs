use std::sync::Arc;

use crate::repository::Repository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
}
