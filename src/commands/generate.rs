//! Generate page documents

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Load posts, paginate them and write one document per page
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = site.load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(site);
    let paths = generator.generate(&posts)?;

    if paths.is_empty() {
        tracing::warn!("No posts found in {:?}, no pages generated", site.content_dir);
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages in {:.2}s",
        paths.len(),
        duration.as_secs_f64()
    );

    Ok(())
}
