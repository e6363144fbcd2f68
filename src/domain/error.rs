use thiserror::Error;

/// Failure taxonomy for one tool invocation.
///
/// `Validation` is raised before any network access and propagates to the
/// protocol layer as an invalid-params error. `Network` and `Provider` are
/// caught at the tool boundary and folded into a `success: false` envelope;
/// they never escape past it. Keep the two channels distinct.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("{0}")]
    Validation(String),

    #[error("Network error connecting to GNews API: {0}")]
    Network(String),

    #[error("GNews API error: {0}")]
    Provider(String),
}

impl NewsError {
    pub fn is_validation(&self) -> bool {
        matches!(self, NewsError::Validation(_))
    }
}
