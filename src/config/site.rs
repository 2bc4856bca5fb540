//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::pagination::{Params, PAGE_SIZE};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Pagination
    pub page_size: usize,
    pub route_pattern: String,
    /// Route parameters shared by every page, e.g. `lang`
    #[serde(default)]
    pub params: Params,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "quietparty".to_string(),
            description: String::new(),
            url: "https://quietparty.net".to_string(),

            content_dir: "src/content/blog".to_string(),
            public_dir: "dist".to_string(),

            page_size: PAGE_SIZE,
            route_pattern: "/blog/[page]/".to_string(),
            params: Params::new(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "quietparty");
        assert_eq!(config.page_size, PAGE_SIZE);
        assert_eq!(config.route_pattern, "/blog/[page]/");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
url: https://example.com
page_size: 5
route_pattern: /[lang]/diary/[page]/
params:
  lang: en
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.route_pattern, "/[lang]/diary/[page]/");
        assert_eq!(config.params.get("lang").map(String::as_str), Some("en"));
        assert_eq!(config.content_dir, "src/content/blog");
        assert_eq!(
            config.extra.get("analytics").and_then(|v| v.as_str()),
            Some("plausible")
        );
    }

    #[test]
    fn test_negative_page_size_rejected() {
        let yaml = "page_size: -3\n";
        assert!(serde_yaml::from_str::<SiteConfig>(yaml).is_err());
    }
}
