//! Record loader
//!
//! Fetches a diary and then its emotion, strictly in that order: the emotion
//! path is keyed by a field of the diary payload. A diary without a resolved
//! emotion is not a valid Ready state, so either fetch failing fails the load.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::paths;
use crate::api::{Method, ResourceClient, JSON_CONTENT_TYPE, STATUS_OK};
use crate::error::{LoadError, DIARY_FETCH_FALLBACK, EMOTION_FETCH_FALLBACK};
use crate::model::{DiaryRecord, EmotionClassification};
use crate::view::ViewState;

pub struct RecordLoader<'a, C: ResourceClient + ?Sized> {
    client: &'a C,
}

impl<'a, C: ResourceClient + ?Sized> RecordLoader<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Run one load cycle and return the resulting view.
    ///
    /// Never returns Loading. A `diary_id` that cannot name a resource (empty,
    /// `.` or `..`) fails without touching the network.
    pub async fn load(&self, diary_id: &str, auth_token: Option<&str>) -> ViewState {
        if !paths::is_addressable(diary_id) {
            warn!(diary_id, "Diary screen opened without a usable diary id");
            return ViewState::Failed(LoadError::MissingIdentifier);
        }

        match self.fetch(diary_id, auth_token).await {
            Ok((diary, emotion)) => {
                debug!(diary_id, emotion_id = emotion.emotion_id, "Diary loaded");
                ViewState::Ready { diary, emotion }
            }
            Err(error) => {
                warn!(diary_id, status = ?error.status(), "Failed to load diary: {}", error);
                ViewState::Failed(error)
            }
        }
    }

    async fn fetch(
        &self,
        diary_id: &str,
        auth_token: Option<&str>,
    ) -> Result<(DiaryRecord, EmotionClassification), LoadError> {
        let diary: DiaryRecord = self
            .get(&paths::diary(diary_id), auth_token, DIARY_FETCH_FALLBACK)
            .await?;

        let emotion: EmotionClassification = self
            .get(
                &paths::self_emotion(diary.emotion_id),
                auth_token,
                EMOTION_FETCH_FALLBACK,
            )
            .await?;

        Ok((diary, emotion))
    }

    /// GET `path` and decode its `data`, treating anything but 200-with-data as failure.
    ///
    /// Transport and decode errors are logged here; the returned error only
    /// carries text that is fit for the screen.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        auth_token: Option<&str>,
        fallback: &str,
    ) -> Result<T, LoadError> {
        let response = self
            .client
            .request(Method::Get, path, None, JSON_CONTENT_TYPE, auth_token)
            .await
            .map_err(|e| {
                warn!(path, "Diary service unreachable: {:#}", e);
                LoadError::unexpected()
            })?;

        let data = response
            .data_on(STATUS_OK)
            .ok_or_else(|| LoadError::remote(response.status, response.error_message(), fallback))?;

        T::deserialize(data).map_err(|e| {
            warn!(path, status = response.status, "Undecodable payload: {}", e);
            LoadError::remote(response.status, response.error_message(), fallback)
        })
    }
}
