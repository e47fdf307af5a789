//! Diary and emotion payloads, plus the captions the screen derives from them.
//!
//! Only the fields the controller touches are modelled; anything else the
//! service sends is ignored on decode.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A diary record as returned by `GET /diaries/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRecord {
    /// Creation date and time, as written by the author (wall-clock, no zone)
    #[serde(with = "diary_date")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Key for the self-emotion lookup
    pub emotion_id: i64,
}

impl DiaryRecord {
    pub fn display(&self) -> DiaryDisplay {
        DiaryDisplay::from_datetime(&self.date)
    }

    /// Photo reference, ignoring empty strings
    pub fn photo(&self) -> Option<&str> {
        self.photo_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// The emotion resolved by `GET /diaries/self-emotions/{emotionId}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionClassification {
    pub emotion_id: i64,
}

/// Date and time captions shown above the diary body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryDisplay {
    /// e.g. "2024년 3월 1일"
    pub date_caption: String,
    /// e.g. "14시 30분"; `None` when the record's time is exactly midnight
    pub time_caption: Option<String>,
}

impl DiaryDisplay {
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        let date_caption = format!(
            "{}년 {}월 {}일",
            datetime.year(),
            datetime.month(),
            datetime.day()
        );
        let (hour, minute) = (datetime.hour(), datetime.minute());
        let time_caption = if hour != 0 || minute != 0 {
            Some(format!("{}시 {}분", hour, minute))
        } else {
            None
        };
        Self {
            date_caption,
            time_caption,
        }
    }
}

/// Parse the service's date field.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.fff]`, the same with a space separator,
/// minute precision, RFC 3339 with an offset (kept as written), and a bare date
/// (midnight).
pub fn parse_diary_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Some(datetime);
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime);
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.naive_local());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

mod diary_date {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S: Serializer>(
        date: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_diary_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("unrecognised diary date '{}'", raw)))
    }
}
