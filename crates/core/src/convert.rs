//! One-shot conversion pipeline
//!
//! Downloads the edge-list CSV, builds the graph, serializes GEXF, and
//! uploads the document under a version-parameterized key. Each run
//! constructs a fresh graph; nothing is shared between runs.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::builder::build_graph;
use crate::gexf::{self, GexfMeta};
use crate::input::parse_rows;
use crate::storage::ObjectStore;

/// Filename pattern for the serialized document
const DESTINATION_TEMPLATE: &str = "parsed-output-{}.gexf";

/// A single CSV → GEXF conversion run
#[derive(Debug, Clone)]
pub struct Converter {
    /// Key of the input CSV object
    pub input_key: String,
    /// Version tag baked into the destination filename
    pub version: String,
    /// Creator string for the GEXF meta block
    pub creator: String,
    /// Graph name, written as the GEXF description
    pub name: String,
}

impl Converter {
    /// Destination key the document is uploaded under
    pub fn destination(&self) -> String {
        DESTINATION_TEMPLATE.replace("{}", &self.version)
    }

    /// Run the full pipeline, returning the destination key
    ///
    /// A missing input object converts as empty input: the result is a
    /// valid GEXF document with no nodes or edges, still uploaded.
    pub fn run(&self, store: &impl ObjectStore) -> Result<String> {
        let content = store
            .download_text(&self.input_key)
            .with_context(|| format!("failed to download input {}", self.input_key))?;

        let rows = parse_rows(&content)
            .with_context(|| format!("failed to parse input {}", self.input_key))?;
        let graph = build_graph(&rows);
        info!(
            rows = rows.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built link graph"
        );

        let meta = GexfMeta {
            creator: self.creator.clone(),
            name: self.name.clone(),
        };
        let document = gexf::serialize(&graph, &meta)?;
        debug!(%document, "serialized GEXF document");

        let destination = self.destination();
        store
            .upload_text(&document, &destination)
            .with_context(|| format!("failed to upload {destination}"))?;
        Ok(destination)
    }
}
