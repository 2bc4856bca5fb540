//! CLI entry point for quietparty

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quietparty")]
#[command(version)]
#[command(about = "Paginate and publish the quietparty blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate page documents
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, page)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quietparty=debug,info"
    } else {
        "quietparty=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let site = quietparty::Site::new(&base_dir)?;
            tracing::info!("Generating pages...");
            site.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let site = quietparty::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, json } => {
            let site = quietparty::Site::new(&base_dir)?;
            quietparty::commands::list::run(&site, &r#type, json)?;
        }

        Commands::Version => {
            println!("quietparty version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
