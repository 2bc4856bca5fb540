//! Generator module - writes one JSON page document per paginated route

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::commands::clean;
use crate::content::Post;
use crate::helpers::{generate_route, route_keys};
use crate::pagination::{paginate_naturally, PageRoute, PaginateOptions};
use crate::Site;

/// Site-wide props merged into every page
#[derive(Debug, Clone, Serialize)]
pub struct SiteProps {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// A paginated blog route
pub type BlogRoute = PageRoute<Post, SiteProps>;

/// Page document generator
pub struct Generator {
    site: Site,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self { site: site.clone() }
    }

    /// Paginate posts (oldest first) with the configured page size
    pub fn paginate(&self, posts: &[Post]) -> Result<Vec<BlogRoute>> {
        let config = &self.site.config;
        let props = SiteProps {
            title: config.title.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
        };
        let options = PaginateOptions::with_props(props)
            .page_size(config.page_size)
            .params(config.params.clone());

        Ok(paginate_naturally(posts, options)?)
    }

    /// URL path of a route
    pub fn route_path(&self, route: &BlogRoute) -> String {
        generate_route(
            &self.site.config.route_pattern,
            &route.params,
            &self.site.config.params,
        )
    }

    /// Write every page document, returning the generated URL paths
    ///
    /// The public directory is rebuilt from scratch so that pages left over
    /// from a larger earlier run do not survive.
    pub fn generate(&self, posts: &[Post]) -> Result<Vec<String>> {
        let pattern = &self.site.config.route_pattern;
        if !route_keys(pattern).iter().any(|key| key == "page") {
            anyhow::bail!("Route pattern {:?} has no [page] parameter", pattern);
        }

        let routes = self.paginate(posts)?;

        clean::run(&self.site)?;
        fs::create_dir_all(&self.site.public_dir)?;
        let mut paths = Vec::with_capacity(routes.len());

        for route in &routes {
            let path = self.route_path(route);
            let output_path = self.output_path(&path);

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, serde_json::to_string_pretty(route)?)?;
            tracing::debug!("Generated: {:?}", output_path);

            paths.push(path);
        }

        Ok(paths)
    }

    fn output_path(&self, route_path: &str) -> PathBuf {
        let mut output = self.site.public_dir.clone();
        for segment in route_path.split('/').filter(|s| !s.is_empty() && *s != "..") {
            output.push(segment);
        }
        output.join("index.json")
    }
}
