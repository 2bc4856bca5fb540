//! Blog post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Path relative to the content directory, without extension
    pub id: String,

    /// URL-friendly id
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication date
    pub date: DateTime<Local>,

    /// Last updated date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Local>>,

    /// Embedded audio player
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song: Option<Song>,

    /// Downloadable attachments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    /// Raw markdown body
    pub body: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, id: String) -> Self {
        let slug = id
            .split('/')
            .map(slug::slugify)
            .collect::<Vec<_>>()
            .join("/");
        Self {
            id,
            slug,
            title,
            description: None,
            date,
            updated: None,
            song: None,
            attachments: Vec::new(),
            body: String::new(),
            extra: HashMap::new(),
        }
    }
}

/// Audio embedded in a post
///
/// Every field is optional. A song normally carries either `url` or
/// `sources`, but nothing here enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Song {
    /// Cover art image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Alternative encodings of the same track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SongSource>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSource {
    pub format: String,
    pub url: String,
}

/// A file attached to a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}
