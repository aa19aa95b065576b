// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The bound image has not reported its natural size yet.
    #[error("image frame not ready (natural size unavailable)")]
    FrameNotReady,

    #[error("no selection")]
    NoSelection,

    #[error("invalid resize handle \"{0}\" (expected nw|ne|sw|se)")]
    InvalidHandle(String),
}
