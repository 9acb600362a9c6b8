use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropletError {
    #[error("invalid mood kind {0:?} (expected happy, sad or excited)")]
    InvalidMoodKind(String),
}
