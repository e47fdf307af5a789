//! Action dispatcher
//!
//! Executes the remote actions available from the diary screen. Every outcome,
//! success or failure, comes back as an [`Acknowledgment`] for the user; none
//! is returned as an error and none touches the view state. There is no retry.

use tracing::{info, warn};

use crate::api::paths;
use crate::api::{Method, ResourceClient, JSON_CONTENT_TYPE, STATUS_CREATED, STATUS_OK};
use crate::model::DiaryRecord;
use crate::navigation::{NavigationRequest, Route};

const ERROR_TITLE: &str = "오류";
const MISSING_ID_MESSAGE: &str = "diaryId가 없습니다.";

const DELETED_TITLE: &str = "일기 삭제";
const DELETED_MESSAGE: &str = "일기가 성공적으로 삭제되었습니다.";
const DELETE_FAILED_TITLE: &str = "삭제 실패";
const DELETE_FAILED_MESSAGE: &str = "일기 삭제에 실패했습니다.";

const PUBLISHED_TITLE: &str = "게시 완료";
const PUBLISHED_MESSAGE: &str = "일기가 커뮤니티에 게시되었습니다.";
const PUBLISH_FAILED_TITLE: &str = "게시 실패";
const PUBLISH_FAILED_MESSAGE: &str = "커뮤니티 게시에 실패했습니다.";

/// A message the user must acknowledge, optionally followed by navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: String,
    pub message: String,
    /// Performed once the user confirms the message
    pub on_confirm: Option<NavigationRequest>,
}

impl Acknowledgment {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_confirm: None,
        }
    }

    pub fn then(mut self, navigation: NavigationRequest) -> Self {
        self.on_confirm = Some(navigation);
        self
    }

    fn server_or(title: &str, server_message: Option<&str>, fallback: &str) -> Self {
        let message = server_message.filter(|m| !m.is_empty()).unwrap_or(fallback);
        Self::new(title, message)
    }
}

/// Result of a publish attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// True only for a 201 response
    pub published: bool,
    pub acknowledgment: Acknowledgment,
}

pub struct ActionDispatcher<'a, C: ResourceClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: ResourceClient + ?Sized> ActionDispatcher<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Delete the diary.
    ///
    /// On success the acknowledgment resets the navigation stack to the diary
    /// root once confirmed, leaving the deleted diary's context entirely.
    pub async fn delete(&self, diary_id: &str, auth_token: Option<&str>) -> Acknowledgment {
        if !paths::is_addressable(diary_id) {
            return Acknowledgment::new(ERROR_TITLE, MISSING_ID_MESSAGE);
        }

        let result = self
            .client
            .request(
                Method::Delete,
                &paths::diary(diary_id),
                None,
                JSON_CONTENT_TYPE,
                auth_token,
            )
            .await;

        match result {
            Ok(response) if response.status == STATUS_OK => {
                info!(diary_id, "Diary deleted");
                Acknowledgment::new(DELETED_TITLE, DELETED_MESSAGE)
                    .then(NavigationRequest::Reset(Route::root()))
            }
            Ok(response) => {
                warn!(diary_id, status = response.status, "Diary delete rejected");
                Acknowledgment::server_or(
                    DELETE_FAILED_TITLE,
                    response.error_message(),
                    DELETE_FAILED_MESSAGE,
                )
            }
            Err(e) => {
                warn!(diary_id, "Diary delete failed: {:#}", e);
                Acknowledgment::new(DELETE_FAILED_TITLE, DELETE_FAILED_MESSAGE)
            }
        }
    }

    /// Publish the diary to the community collection
    pub async fn publish(&self, diary_id: &str, auth_token: Option<&str>) -> PublishOutcome {
        if !paths::is_addressable(diary_id) {
            return PublishOutcome {
                published: false,
                acknowledgment: Acknowledgment::new(ERROR_TITLE, MISSING_ID_MESSAGE),
            };
        }

        let result = self
            .client
            .request(
                Method::Post,
                &paths::public_diaries(diary_id),
                None,
                JSON_CONTENT_TYPE,
                auth_token,
            )
            .await;

        let (published, acknowledgment) = match result {
            Ok(response) if response.status == STATUS_CREATED => {
                info!(diary_id, "Diary published to community");
                (true, Acknowledgment::new(PUBLISHED_TITLE, PUBLISHED_MESSAGE))
            }
            Ok(response) => {
                warn!(diary_id, status = response.status, "Diary publish rejected");
                (
                    false,
                    Acknowledgment::server_or(
                        PUBLISH_FAILED_TITLE,
                        response.error_message(),
                        PUBLISH_FAILED_MESSAGE,
                    ),
                )
            }
            Err(e) => {
                warn!(diary_id, "Diary publish failed: {:#}", e);
                (
                    false,
                    Acknowledgment::new(PUBLISH_FAILED_TITLE, PUBLISH_FAILED_MESSAGE),
                )
            }
        };

        PublishOutcome {
            published,
            acknowledgment,
        }
    }

    /// Hand off to the analysis screen. No remote call.
    pub fn analyze(&self, diary_id: &str, diary: &DiaryRecord) -> NavigationRequest {
        NavigationRequest::Navigate(Route::DailyAnalyze {
            diary_id: diary_id.to_string(),
            emotion_id: diary.emotion_id,
        })
    }
}
