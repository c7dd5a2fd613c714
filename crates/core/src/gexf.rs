//! GEXF serialization
//!
//! Emits a GEXF 1.2 document with an XML declaration, indented output,
//! a `meta` block carrying creator and description, and a single
//! directed static graph. Nodes and edges are written in insertion
//! order. quick-xml escapes attribute values and text content, so
//! XML-unsafe characters in URL labels are never a failure mode.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::graph::Graph;

/// Creator label used when the caller supplies none
pub const DEFAULT_CREATOR: &str = "Gexf Google cloud";
/// Graph name used when the caller supplies none
pub const DEFAULT_NAME: &str = "Url graph file";

const GEXF_XMLNS: &str = "http://www.gexf.net/1.2draft";
const GEXF_VERSION: &str = "1.2";

/// Document-level metadata for the GEXF `meta` element
#[derive(Debug, Clone)]
pub struct GexfMeta {
    pub creator: String,
    pub name: String,
}

impl Default for GexfMeta {
    fn default() -> Self {
        Self {
            creator: DEFAULT_CREATOR.to_string(),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// Serialize a graph to an indented GEXF document
pub fn serialize(graph: &Graph, meta: &GexfMeta) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut gexf = BytesStart::new("gexf");
    gexf.push_attribute(("xmlns", GEXF_XMLNS));
    gexf.push_attribute(("version", GEXF_VERSION));
    writer.write_event(Event::Start(gexf))?;

    write_meta(&mut writer, meta)?;

    let mut graph_el = BytesStart::new("graph");
    graph_el.push_attribute(("defaultedgetype", "directed"));
    graph_el.push_attribute(("mode", "static"));
    writer.write_event(Event::Start(graph_el))?;

    writer.write_event(Event::Start(BytesStart::new("nodes")))?;
    for node in graph.nodes() {
        let id = node.id.to_string();
        let mut el = BytesStart::new("node");
        el.push_attribute(("id", id.as_str()));
        el.push_attribute(("label", node.label.as_str()));
        writer.write_event(Event::Empty(el))?;
    }
    writer.write_event(Event::End(BytesEnd::new("nodes")))?;

    writer.write_event(Event::Start(BytesStart::new("edges")))?;
    for (source, target, edge) in graph.edges() {
        let id = edge.id.to_string();
        let source_id = source.id.to_string();
        let target_id = target.id.to_string();
        let mut el = BytesStart::new("edge");
        el.push_attribute(("id", id.as_str()));
        el.push_attribute(("source", source_id.as_str()));
        el.push_attribute(("target", target_id.as_str()));
        writer.write_event(Event::Empty(el))?;
    }
    writer.write_event(Event::End(BytesEnd::new("edges")))?;

    writer.write_event(Event::End(BytesEnd::new("graph")))?;
    writer.write_event(Event::End(BytesEnd::new("gexf")))?;

    String::from_utf8(writer.into_inner()).context("GEXF document is not valid UTF-8")
}

fn write_meta(writer: &mut Writer<Vec<u8>>, meta: &GexfMeta) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("meta")))?;

    writer.write_event(Event::Start(BytesStart::new("creator")))?;
    writer.write_event(Event::Text(BytesText::new(&meta.creator)))?;
    writer.write_event(Event::End(BytesEnd::new("creator")))?;

    writer.write_event(Event::Start(BytesStart::new("description")))?;
    writer.write_event(Event::Text(BytesText::new(&meta.name)))?;
    writer.write_event(Event::End(BytesEnd::new("description")))?;

    writer.write_event(Event::End(BytesEnd::new("meta")))?;
    Ok(())
}
