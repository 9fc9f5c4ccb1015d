//! # Map Serialization
//!
//! Renders a [`BusinessObjectMap`] tree to the two report formats attached to
//! ingest notifications: a canonical XML document and an independent HTML
//! document. Both are pure functions over the tree with no archive access.
//!
//! The XML element names and nesting (`bo` > `id`, `name`, `type`,
//! `depositStatus`, `alternateid`, nested `bo`) are a compatibility contract
//! consumed by downstream tooling. The HTML structure is not contractual, but
//! every node's id, type, name, status, and alternate ids must appear as text
//! content, nested to mirror the tree.

use crate::models::BusinessObjectMap;
use std::borrow::Cow;
use std::io::{self, Write};

/// Write the canonical XML rendition of a map. One top-level `bo` element per
/// document; absent optional fields are omitted, never rendered empty.
pub fn write_xml_map<W: Write>(map: &BusinessObjectMap, sink: &mut W) -> io::Result<()> {
    writeln!(sink, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    write_xml_node(map, sink, 0)
}

fn write_xml_node<W: Write>(node: &BusinessObjectMap, sink: &mut W, depth: usize) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    writeln!(sink, "{pad}<bo>")?;
    writeln!(sink, "{pad}  <id>{}</id>", escape_markup(&node.id))?;
    if let Some(name) = &node.name {
        writeln!(sink, "{pad}  <name>{}</name>", escape_markup(name))?;
    }
    if let Some(object_type) = &node.object_type {
        writeln!(sink, "{pad}  <type>{}</type>", escape_markup(object_type))?;
    }
    if let Some(status) = node.deposit_status {
        writeln!(sink, "{pad}  <depositStatus>{status}</depositStatus>")?;
    }
    for alternate_id in &node.alternate_ids {
        writeln!(
            sink,
            "{pad}  <alternateid>{}</alternateid>",
            escape_markup(alternate_id)
        )?;
    }
    for child in &node.children {
        write_xml_node(child, sink, depth + 1)?;
    }
    writeln!(sink, "{pad}</bo>")
}

/// Write the human-readable HTML rendition of a map as a self-contained
/// document. Nested lists mirror the tree structure.
pub fn write_html_map<W: Write>(map: &BusinessObjectMap, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "<!DOCTYPE html>")?;
    writeln!(sink, "<html>")?;
    writeln!(sink, "<head>")?;
    writeln!(sink, r#"  <meta charset="utf-8"/>"#)?;
    writeln!(
        sink,
        "  <title>Deposit status for {}</title>",
        escape_markup(map.name.as_deref().unwrap_or(&map.id))
    )?;
    writeln!(sink, "</head>")?;
    writeln!(sink, "<body>")?;
    writeln!(
        sink,
        "  <h1>Deposit status for {}</h1>",
        escape_markup(map.name.as_deref().unwrap_or(&map.id))
    )?;
    writeln!(sink, "  <ul>")?;
    write_html_node(map, sink, 2)?;
    writeln!(sink, "  </ul>")?;
    writeln!(sink, "</body>")?;
    writeln!(sink, "</html>")
}

fn write_html_node<W: Write>(
    node: &BusinessObjectMap,
    sink: &mut W,
    depth: usize,
) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    writeln!(sink, "{pad}<li>")?;
    writeln!(sink, "{pad}  <b>Id:</b> {}<br/>", escape_markup(&node.id))?;
    if let Some(object_type) = &node.object_type {
        writeln!(sink, "{pad}  <b>Type:</b> {}<br/>", escape_markup(object_type))?;
    }
    if let Some(name) = &node.name {
        writeln!(sink, "{pad}  <b>Name:</b> {}<br/>", escape_markup(name))?;
    }
    if let Some(status) = node.deposit_status {
        writeln!(sink, "{pad}  <b>Deposit status:</b> {status}<br/>")?;
    }
    for alternate_id in &node.alternate_ids {
        writeln!(
            sink,
            "{pad}  <b>Alternate id:</b> {}<br/>",
            escape_markup(alternate_id)
        )?;
    }
    if !node.children.is_empty() {
        writeln!(sink, "{pad}  <ul>")?;
        for child in &node.children {
            write_html_node(child, sink, depth + 2)?;
        }
        writeln!(sink, "{pad}  </ul>")?;
    }
    writeln!(sink, "{pad}</li>")
}

/// Escape text content for XML and HTML element bodies. The five standard
/// entities cover both formats.
fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DepositStatus;

    fn sample_map() -> BusinessObjectMap {
        BusinessObjectMap::new("col:1")
            .with_name("Ocean & Coastal <Samples>")
            .with_object_type("Collection")
            .with_status(DepositStatus::Deposited)
            .with_alternate_id("local:42")
            .with_child(
                BusinessObjectMap::new("item:1")
                    .with_name("CTD casts")
                    .with_object_type("DataItem")
                    .with_status(DepositStatus::Failed),
            )
    }

    fn render_xml(map: &BusinessObjectMap) -> String {
        let mut sink = Vec::new();
        write_xml_map(map, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    fn render_html(map: &BusinessObjectMap) -> String {
        let mut sink = Vec::new();
        write_html_map(map, &mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_xml_escapes_text_content() {
        let xml = render_xml(&sample_map());
        assert!(xml.contains("<name>Ocean &amp; Coastal &lt;Samples&gt;</name>"));
        assert!(!xml.contains("Ocean & Coastal"));
    }

    #[test]
    fn test_xml_omits_absent_fields() {
        let bare = BusinessObjectMap::new("col:2");
        let xml = render_xml(&bare);
        assert!(xml.contains("<id>col:2</id>"));
        assert!(!xml.contains("<name>"));
        assert!(!xml.contains("<type>"));
        assert!(!xml.contains("<depositStatus>"));
        assert!(!xml.contains("<alternateid>"));
    }

    #[test]
    fn test_xml_nests_children_inside_parent() {
        let xml = render_xml(&sample_map());
        let parent_close = xml.rfind("</bo>").unwrap();
        let child_open = xml.match_indices("<bo>").nth(1).unwrap().0;
        assert!(child_open < parent_close);
        assert!(xml.contains("<depositStatus>FAILED</depositStatus>"));
    }

    #[test]
    fn test_html_contains_all_field_values() {
        let html = render_html(&sample_map());
        for value in ["col:1", "Collection", "DEPOSITED", "local:42", "item:1", "CTD casts", "FAILED"] {
            assert!(html.contains(value), "missing {value} in html output");
        }
        assert!(html.contains("Ocean &amp; Coastal &lt;Samples&gt;"));
    }

    #[test]
    fn test_escape_markup_leaves_clean_text_borrowed() {
        assert!(matches!(escape_markup("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_markup(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
