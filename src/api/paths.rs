//! Endpoint paths used by the controller
//!
//! Diary ids are opaque, so they are percent-encoded before they go into a
//! path segment or query value. `.` and `..` cannot be sent as a segment at
//! all (URL normalisation would resolve them), see [`is_addressable`].

use urlencoding::encode;

/// Whether `diary_id` can name a diary resource
pub fn is_addressable(diary_id: &str) -> bool {
    !matches!(diary_id, "" | "." | "..")
}

/// `GET` / `DELETE` a single diary
pub fn diary(diary_id: &str) -> String {
    format!("/diaries/{}", encode(diary_id))
}

/// `GET` the emotion attached to a diary, keyed by the diary's `emotionId`
pub fn self_emotion(emotion_id: i64) -> String {
    format!("/diaries/self-emotions/{}", emotion_id)
}

/// `POST` a personal diary to the community collection
pub fn public_diaries(personal_diary_id: &str) -> String {
    format!(
        "/public-diaries?personalDiaryId={}",
        encode(personal_diary_id)
    )
}
