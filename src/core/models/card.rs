use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    #[serde(default = "new_card_id")]
    pub id: String,
    pub title: String,
    /// Creation time. Never touched after the card is created, moving a card
    /// keeps it.
    #[serde(deserialize_with = "deserialize_status")]
    pub status: DateTime<Utc>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self::created_at(title, Utc::now())
    }

    pub fn created_at(title: impl Into<String>, status: DateTime<Utc>) -> Self {
        Self {
            id: new_card_id(),
            title: title.into(),
            status,
        }
    }
}

fn new_card_id() -> String {
    Uuid::new_v4().to_string()
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized card timestamp: {raw}")))
}

/// Accepts RFC 3339 plus the formats older boards stored: `2022-05-22 18:15`
/// (local time, as the browser reads it) and `Date.toString()` output.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(local_to_utc(naive));
        }
    }
    // "Sun May 22 2022 18:15:00 GMT+0800 (China Standard Time)"
    let without_zone_name = raw.split(" (").next().unwrap_or(raw);
    DateTime::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z")
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Wall-clock time in the local zone. A time skipped by a DST jump has no
/// local reading and is taken as UTC.
pub fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cards_get_distinct_ids() {
        let a = Card::new("Write docs");
        let b = Card::new("Write docs");
        assert_ne!(a.id, b.id);
        assert_eq!(a.title, b.title);
    }

    fn local(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parses_rfc3339_and_legacy_formats() {
        let expected = Utc.with_ymd_and_hms(2022, 5, 22, 18, 15, 0).unwrap();
        assert_eq!(parse_timestamp("2022-05-22T18:15:00Z"), Some(expected));
        assert_eq!(
            parse_timestamp("Mon May 23 2022 02:15:00 GMT+0800 (China Standard Time)"),
            Some(expected)
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn naive_timestamps_are_local_wall_clock() {
        let expected = local(2022, 5, 22, 18, 15);
        assert_eq!(parse_timestamp("2022-05-22 18:15"), Some(expected));
        assert_eq!(parse_timestamp("2022-05-22 18:15:00"), Some(expected));
        assert_eq!(
            expected.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
            "2022-05-22 18:15"
        );
    }

    #[test]
    fn deserializes_cards_without_an_id() {
        let card: Card =
            serde_json::from_str(r#"{"title":"开发任务-1","status":"2022-05-22 18:15"}"#).unwrap();
        assert_eq!(card.title, "开发任务-1");
        assert!(Uuid::parse_str(&card.id).is_ok());
        assert_eq!(card.status, local(2022, 5, 22, 18, 15));
    }

    #[test]
    fn rejects_unparsable_status() {
        let result = serde_json::from_str::<Card>(r#"{"title":"A","status":"not a date"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialized_card_reads_back_unchanged() {
        let card = Card::created_at("Ship it", Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
