use crate::config::Config;
use crate::router::RouteTable;
use crate::site::View;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable<View>>,
    pub config: Arc<Config>,
}
