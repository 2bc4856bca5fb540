//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::{Attachment, Song};

/// Custom deserializer that accepts a string or a bare number as a string
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Front-matter of a blog post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub updated: Option<String>,
    pub song: Option<Song>,
    pub attachments: Vec<Attachment>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Empty block: the closing fence directly follows the opening one
        if let Some(remaining) = rest.strip_prefix("---") {
            return Ok((FrontMatter::default(), remaining.trim_start_matches(['\n', '\r'])));
        }

        let end_pos = rest
            .find("\n---")
            .ok_or_else(|| anyhow!("Unterminated front-matter block"))?;
        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml_content)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;

        Ok((fm, remaining))
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }

    /// Parse the updated date string into a DateTime
    pub fn parse_updated(&self) -> Option<DateTime<Local>> {
        self.updated.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in various formats
///
/// Bare numbers are read as milliseconds since the Unix epoch.
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    if let Ok(millis) = s.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis).map(|dt| dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&d.and_hms_opt(0, 0, 0)?).earliest();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
description: first post
date: 2024-01-15 10:30:00
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.description, Some("first post".to_string()));
        assert!(remaining.starts_with("This is the content."));
    }

    #[test]
    fn test_parse_song_and_attachments() {
        let content = r#"---
title: Tape
date: 2024-03-02
song:
  art: ./cover.jpg
  sources:
    - format: audio/ogg
      url: /music/tape.ogg
    - format: audio/mpeg
      url: /music/tape.mp3
attachments:
  - type: pdf
    url: /files/lyrics.pdf
mood: quiet
---
Listen.
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        let song = fm.song.unwrap();
        assert_eq!(song.art.as_deref(), Some("./cover.jpg"));
        assert_eq!(song.url, None);
        let sources = song.sources.unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].format, "audio/mpeg");
        assert_eq!(fm.attachments.len(), 1);
        assert_eq!(fm.attachments[0].kind, "pdf");
        assert_eq!(
            fm.extra.get("mood").and_then(|v| v.as_str()),
            Some("quiet")
        );
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("Just text.\n").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, "Just text.\n");
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("---\n---\nBody\n").unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(remaining, "Body\n");
    }

    #[test]
    fn test_unterminated_frontmatter() {
        assert!(FrontMatter::parse("---\ntitle: Oops\n").is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(FrontMatter::parse("---\ntitle: [unclosed\n---\nBody\n").is_err());
    }

    #[test]
    fn test_parse_date() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");
    }

    #[test]
    fn test_parse_date_variants() {
        assert_eq!(
            parse_date_string("2024/02/03").map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2024-02-03".to_string())
        );
        assert!(parse_date_string("2024-01-15T10:30:00Z").is_some());
        assert!(parse_date_string("0").is_some());
        assert!(parse_date_string("not a date").is_none());
    }

    #[test]
    fn test_float_date_in_yaml() {
        let (fm, _) = FrontMatter::parse("---\ndate: 1.7e12\n---\n").unwrap();
        assert_eq!(fm.date.as_deref(), Some("1700000000000"));
        assert!(fm.parse_date().is_some());

        let (fm, _) = FrontMatter::parse("---\ndate: 2.5\nupdated: true\n---\n").unwrap();
        assert!(fm.parse_date().is_none());
        assert_eq!(fm.updated, None);
    }

    #[test]
    fn test_numeric_date_in_yaml() {
        let (fm, _) = FrontMatter::parse("---\ndate: 1700000000000\n---\n").unwrap();
        assert_eq!(fm.date.as_deref(), Some("1700000000000"));
        assert!(fm.parse_date().is_some());
    }
}
