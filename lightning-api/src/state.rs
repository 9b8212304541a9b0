use std::sync::Arc;

use lightning_offer::FlightGenerator;

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<FlightGenerator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            generator: Arc::new(FlightGenerator::default()),
        }
    }
}
