use std::sync::Arc;

use growthcalc_core::projection::{ProjectionService, ProjectionServiceTrait};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub projection_service: Arc<dyn ProjectionServiceTrait>,
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let settings = config.projection_settings();
    tracing::info!(
        max_total_days = settings.max_total_days,
        value_scale = settings.value_scale,
        "projection service ready"
    );
    Arc::new(AppState {
        projection_service: Arc::new(ProjectionService::new(settings)),
    })
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("growthcalc_server=info,growthcalc_core=info,tower_http=info")
    });
    let builder = fmt().with_env_filter(filter).with_target(true);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}
