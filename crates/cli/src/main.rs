use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use linkgraph_core::convert::Converter;
use linkgraph_core::gexf::{DEFAULT_CREATOR, DEFAULT_NAME};
use linkgraph_core::retry::RetryPolicy;
use linkgraph_core::storage::{FsStore, RetryingStore};
use tracing::info;

/// linkgraph - Convert a CSV edge list into a GEXF link graph
#[derive(Parser)]
#[command(name = "linkgraph")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Build a deduplicated GEXF URL graph from a CSV edge list", long_about = None)]
struct Cli {
    /// Root directory of the object store
    #[arg(long, env = "BUCKET_NAME")]
    bucket: PathBuf,

    /// Key of the input CSV object within the store
    #[arg(long, env = "KEYWORDS_FILE_PATH")]
    input: String,

    /// Creator string written into the GEXF meta block
    #[arg(long, default_value = DEFAULT_CREATOR)]
    creator: String,

    /// Graph name, written as the GEXF description
    #[arg(long, default_value = DEFAULT_NAME)]
    name: String,

    /// Version tag for the output filename (default: current timestamp)
    #[arg(long)]
    version_tag: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    // Timestamp is captured once, at invocation time.
    let version = cli
        .version_tag
        .unwrap_or_else(|| Local::now().format("%Y%m%d%H%M%S").to_string());

    let store = RetryingStore::new(FsStore::new(&cli.bucket), RetryPolicy::default());
    let converter = Converter {
        input_key: cli.input,
        version,
        creator: cli.creator,
        name: cli.name,
    };

    let destination = converter.run(&store)?;
    info!(%destination, "conversion finished");
    println!("{destination}");
    Ok(())
}
