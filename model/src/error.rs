use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// A segment index past the last record pair. The navigation state should never produce one.
    #[error("segment index {index} out of range; the last valid index is {max}")]
    OutOfRange { index: usize, max: usize },
}
