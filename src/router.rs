//! Edit intent router
//!
//! The screen offers a single "edit" affordance. Which editor it leads to is
//! only decided after the user answers a confirmation prompt:
//!
//! ```text
//! Idle ──request_edit──▶ ConfirmingEditTarget ──choose(Emotion)──▶ Routed(Emotion)
//!  ▲                            │            └────choose(Content)──▶ Routed(Content)
//!  └──────────dismiss───────────┘
//! ```
//!
//! Routed is terminal: control has left for another screen.

use tracing::debug;

use crate::error::ControllerError;
use crate::model::EmotionClassification;
use crate::navigation::{NavigationRequest, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Re-pick the emotion; needs the diary id and the resolved emotion id
    Emotion,
    /// Rewrite the text; needs only the diary id
    Content,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditRouterState {
    #[default]
    Idle,
    ConfirmingEditTarget,
    Routed(EditTarget),
}

#[derive(Debug, Clone, Default)]
pub struct EditIntentRouter {
    state: EditRouterState,
}

impl EditIntentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EditRouterState {
        self.state
    }

    /// Whether the edit-target prompt should be visible
    pub fn is_confirming(&self) -> bool {
        self.state == EditRouterState::ConfirmingEditTarget
    }

    /// The user tapped "edit"
    pub fn request_edit(&mut self) -> Result<(), ControllerError> {
        match self.state {
            EditRouterState::Idle => {
                self.transition(EditRouterState::ConfirmingEditTarget);
                Ok(())
            }
            other => Err(ControllerError::unavailable(
                "edit",
                format!("edit router is {:?}", other),
            )),
        }
    }

    /// The user closed the prompt without choosing
    pub fn dismiss(&mut self) -> Result<(), ControllerError> {
        match self.state {
            EditRouterState::ConfirmingEditTarget => {
                self.transition(EditRouterState::Idle);
                Ok(())
            }
            other => Err(ControllerError::unavailable(
                "dismiss-edit",
                format!("edit router is {:?}", other),
            )),
        }
    }

    /// The user picked an editor; returns where to go
    pub fn choose(
        &mut self,
        target: EditTarget,
        diary_id: &str,
        emotion: &EmotionClassification,
    ) -> Result<NavigationRequest, ControllerError> {
        if self.state != EditRouterState::ConfirmingEditTarget {
            return Err(ControllerError::unavailable(
                "choose-edit-target",
                format!("edit router is {:?}", self.state),
            ));
        }

        let route = match target {
            EditTarget::Emotion => Route::DiaryEmotion {
                diary_id: Some(diary_id.to_string()),
                emotion_id: Some(emotion.emotion_id),
            },
            EditTarget::Content => Route::Dailys {
                diary_id: diary_id.to_string(),
            },
        };

        self.transition(EditRouterState::Routed(target));
        Ok(NavigationRequest::Navigate(route))
    }

    /// Back to Idle when the screen starts over for a new diary
    pub(crate) fn reset(&mut self) {
        if self.state != EditRouterState::Idle {
            self.transition(EditRouterState::Idle);
        }
    }

    fn transition(&mut self, next: EditRouterState) {
        debug!(from = ?self.state, to = ?next, "Edit router transition");
        self.state = next;
    }
}
