//! Navigation handoff requests emitted by the controller.
//!
//! The controller never drives the navigation stack itself; it returns a
//! [`NavigationRequest`] and the presentation layer performs it.

use std::fmt;

/// Screens reachable from the diary screen, with their parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Emotion picker. With a diary id it edits that diary's emotion; with no
    /// parameters it is the root of the diary stack.
    DiaryEmotion {
        diary_id: Option<String>,
        emotion_id: Option<i64>,
    },
    /// Content editor
    Dailys { diary_id: String },
    /// Analysis view
    DailyAnalyze { diary_id: String, emotion_id: i64 },
}

impl Route {
    /// The root of the diary stack
    pub fn root() -> Self {
        Route::DiaryEmotion {
            diary_id: None,
            emotion_id: None,
        }
    }

    /// Screen name as registered with the navigator
    pub fn name(&self) -> &'static str {
        match self {
            Route::DiaryEmotion { .. } => "DiaryEmotion",
            Route::Dailys { .. } => "Dailys",
            Route::DailyAnalyze { .. } => "DailyAnalyze",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::DiaryEmotion {
                diary_id,
                emotion_id,
            } => {
                write!(f, "DiaryEmotion")?;
                if let Some(diary_id) = diary_id {
                    write!(f, " diaryId={}", diary_id)?;
                }
                if let Some(emotion_id) = emotion_id {
                    write!(f, " emotionId={}", emotion_id)?;
                }
                Ok(())
            }
            Route::Dailys { diary_id } => write!(f, "Dailys diaryId={}", diary_id),
            Route::DailyAnalyze {
                diary_id,
                emotion_id,
            } => write!(f, "DailyAnalyze diaryId={} emotionId={}", diary_id, emotion_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Push a screen on top of the current stack
    Navigate(Route),
    /// Replace the whole stack with a single screen, discarding history
    Reset(Route),
    /// Pop the current screen
    Back,
}

impl NavigationRequest {
    pub fn route(&self) -> Option<&Route> {
        match self {
            NavigationRequest::Navigate(route) | NavigationRequest::Reset(route) => Some(route),
            NavigationRequest::Back => None,
        }
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationRequest::Navigate(route) => write!(f, "navigate {}", route),
            NavigationRequest::Reset(route) => write!(f, "reset to {}", route),
            NavigationRequest::Back => write!(f, "back"),
        }
    }
}
