//! Content loader - loads blog posts from the content directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::Site;

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts, oldest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort by date ascending (oldest first)
        posts.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), content_dir);

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let date = fm.parse_date().unwrap_or_else(|| {
            if fm.date.is_some() {
                tracing::warn!("Unrecognized date in {:?}, using file time", path);
            }
            file_modified.unwrap_or_else(Local::now)
        });
        let updated = fm.parse_updated();

        let id = post_id(&self.site.content_dir, path);

        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let mut post = Post::new(title, date, id);
        post.description = fm.description;
        post.updated = updated;
        post.song = fm.song;
        post.attachments = fm.attachments;
        post.body = body.to_string();
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Check if a file is a markdown or MDX file
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx")
        .unwrap_or(false)
}

/// Path relative to the content directory, without extension, `/`-separated
fn post_id(content_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(content_dir).unwrap_or(path);
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
