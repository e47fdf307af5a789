//! View state: the single source of truth for what the screen renders.

use crate::error::LoadError;
use crate::model::{DiaryDisplay, DiaryRecord, EmotionClassification};

/// What the presentation layer should render
///
/// ```text
/// Loading ──both fetches ok──▶ Ready
///    │
///    └──any failure──────────▶ Failed
/// ```
///
/// Ready and Failed are terminal for a load cycle. Only a new cycle resets to Loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Ready {
        diary: DiaryRecord,
        emotion: EmotionClassification,
    },
    Failed(LoadError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready { .. })
    }

    pub fn diary(&self) -> Option<&DiaryRecord> {
        match self {
            ViewState::Ready { diary, .. } => Some(diary),
            _ => None,
        }
    }

    pub fn emotion(&self) -> Option<&EmotionClassification> {
        match self {
            ViewState::Ready { emotion, .. } => Some(emotion),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            ViewState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Date/time captions, when a diary is loaded
    pub fn display(&self) -> Option<DiaryDisplay> {
        self.diary().map(DiaryRecord::display)
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Ready { .. } => "ready",
            ViewState::Failed(_) => "failed",
        }
    }
}
