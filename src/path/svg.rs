//! Path-data extraction from SVG documents laid out like KanjiVG: one `<path>` per stroke.

use crate::foundation::error::{StrokeError, StrokeResult};

/// `d` attribute of every `<path>` element, in document order.
///
/// Elements without a `d` attribute are skipped, as is anything inside comments or CDATA.
/// The document must be well-formed XML; a DTD internal subset is allowed.
pub fn extract_path_data(svg: &str) -> StrokeResult<Vec<String>> {
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(svg, opts)
        .map_err(|e| StrokeError::validation(format!("invalid svg document: {e}")))?;

    let out: Vec<String> = doc
        .descendants()
        .filter(|n| n.has_tag_name("path"))
        .filter_map(|n| n.attribute("d"))
        .map(str::to_owned)
        .collect();

    tracing::trace!(paths = out.len(), "extracted svg path data");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/svg.rs"]
mod tests;
