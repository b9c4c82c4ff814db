//! Sitemap XML generation
//!
//! Writes the ranked pages as a sitemaps.org `urlset`, highest priority
//! first.

use crate::output::{OutputError, OutputResult};
use crate::priority::PagePriority;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

/// Namespace of the sitemap protocol
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const GENERATOR_COMMENT: &str = " Generated by creeper ";

/// Formats ranked pages as a sitemap document
///
/// The pages are written in the order given; pass the output of
/// [`rank`](crate::priority::rank).
pub fn format_sitemap(ranked: &[PagePriority]) -> OutputResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Comment(BytesText::new(GENERATOR_COMMENT)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    writer.write_event(Event::Start(urlset))?;

    for page in ranked {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", page.url.as_str())?;
        write_text_element(&mut writer, "priority", &page.formatted())?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| OutputError::Format(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> OutputResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Writes the sitemap for the ranked pages to `output_path`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the sitemap
/// * `Err(OutputError)` - Failed to format or write it
pub fn write_sitemap(ranked: &[PagePriority], output_path: &Path) -> OutputResult<()> {
    let xml = format_sitemap(ranked)?;
    std::fs::write(output_path, xml)?;
    Ok(())
}
