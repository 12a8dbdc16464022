use crate::errors::Result;
use crate::projection::projection_model::{Projection, ProjectionConfig, ProjectionSettings};

pub trait ProjectionServiceTrait: Send + Sync {
    fn settings(&self) -> &ProjectionSettings;

    /// Validates `config` against the service settings, then projects it.
    fn calculate(&self, config: &ProjectionConfig) -> Result<Projection>;
}
