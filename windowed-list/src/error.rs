use thiserror::Error;

/// Rejected renderer configuration.
///
/// Only returned by the opt-in fail-fast paths ([`crate::ListConfig::validate`],
/// [`crate::WindowedListRenderer::try_new`]). The rendering API itself never fails.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("item height must be a positive, finite number of pixels (got {height})")]
    InvalidItemHeight { height: f64 },
    #[error("announcer id must not be empty (use `None` to disable announcements)")]
    EmptyAnnouncerId,
}
