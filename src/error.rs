//! Error types for the diary controller
//!
//! Two families:
//! - [`LoadError`] is the reason carried by a failed view. Its `Display` text
//!   is what the screen shows to the user.
//! - [`ControllerError`] is returned when the presentation layer asks for an
//!   action that is not available in the current state.
//!
//! Remote action failures (delete, publish) are neither; they are reported as
//! acknowledgments by the dispatcher.

use thiserror::Error;

/// Fallback shown when the diary fetch fails without a server message
pub const DIARY_FETCH_FALLBACK: &str = "일기 데이터를 불러올 수 없습니다.";

/// Fallback shown when the emotion fetch fails without a server message
pub const EMOTION_FETCH_FALLBACK: &str = "감정 데이터를 불러올 수 없습니다.";

/// Fallback shown when a load aborts on a transport or decode error
pub const UNEXPECTED_LOAD_FALLBACK: &str = "일기 데이터를 가져오는 중 오류가 발생했습니다.";

/// Why a load cycle ended in the failed view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The screen was opened without a usable diary id; no request was made
    #[error("diaryId가 전달되지 않았습니다.")]
    MissingIdentifier,

    /// The service answered with a non-success status or without `data`
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never produced a usable response (network, decoding)
    #[error("{0}")]
    Unexpected(String),
}

impl LoadError {
    /// Build a remote failure, preferring the server's message over `fallback`
    pub fn remote(status: u16, server_message: Option<&str>, fallback: &str) -> Self {
        let message = server_message
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string();
        LoadError::Remote { status, message }
    }

    /// Failure without a usable response. The cause belongs in the log, not
    /// in front of the user.
    pub fn unexpected() -> Self {
        LoadError::Unexpected(UNEXPECTED_LOAD_FALLBACK.to_string())
    }

    /// Status code of the failing response, if the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors returned to the presentation layer by [`crate::DiaryController`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Action '{action}' is not available: {reason}")]
    ActionUnavailable {
        action: &'static str,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ControllerError {
    pub(crate) fn unavailable(action: &'static str, reason: impl Into<String>) -> Self {
        ControllerError::ActionUnavailable {
            action,
            reason: reason.into(),
        }
    }
}
