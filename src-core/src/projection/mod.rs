pub mod projection_input;
pub mod projection_model;
pub mod projection_result;
pub mod projection_service;
pub mod projection_traits;

pub use projection_model::{
    AdditionalPeriod, Projection, ProjectionConfig, ProjectionDay, ProjectionSettings,
    ProjectionSummary, DEFAULT_MAX_TOTAL_DAYS, PORTFOLIO_VALUE_SCALE,
};
pub use projection_result::{ProjectionResult, SummaryResult};
pub use projection_service::{project, project_with_scale, ProjectionService};
pub use projection_traits::ProjectionServiceTrait;
