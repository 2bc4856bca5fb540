//! List site content

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, json: bool) -> Result<()> {
    let posts = site.load_posts()?;

    match content_type {
        "post" | "posts" => {
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.id
                );
            }
        }
        "page" | "pages" => {
            let generator = Generator::new(site);
            let routes = generator.paginate(&posts)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
                return Ok(());
            }
            println!("Pages ({}):", routes.len());
            for route in &routes {
                let page = route.page();
                println!("  {} {}", page.current_page, generator.route_path(route));
                for post in &page.data {
                    println!("    {} - {}", post.date.format("%Y-%m-%d"), post.title);
                }
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, page", content_type);
        }
    }

    Ok(())
}
