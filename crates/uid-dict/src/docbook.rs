//! Single-pass docbook reader for the Part 6 document.
//!
//! One event-driven walk with `quick_xml` produces both the document
//! subtitle (for the revision check) and the rows of the table whose
//! caption matches the target. Element names are matched by local name,
//! so the docbook namespace prefix (or lack of one) does not matter.

use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};

use crate::error::GenerateError;
use crate::model::UidEntry;

/// What one pass over the document yields.
#[derive(Debug)]
pub struct ParsedDocument {
    /// Text of the document's first top-level `subtitle`, if any.
    pub subtitle: Option<String>,
    /// One entry per row of the matched table's body, in document order.
    pub entries: Vec<UidEntry>,
}

/// Text being collected for one `para` cell.
///
/// A cell's text is the content of an `emphasis` child when one is
/// present, otherwise the paragraph's own text.
#[derive(Debug, Default)]
struct CellCapture {
    para_text: String,
    emphasis_text: String,
    saw_emphasis: bool,
    in_emphasis: bool,
}

impl CellCapture {
    fn push_text(&mut self, text: &str) {
        if self.in_emphasis {
            self.emphasis_text.push_str(text);
        } else {
            self.para_text.push_str(text);
        }
    }

    fn into_cell(self) -> String {
        let raw = if self.saw_emphasis {
            self.emphasis_text
        } else {
            self.para_text
        };
        clean_cell(&raw)
    }
}

/// Trim and remove zero-width spaces, which Part 6 sprinkles through
/// long UID values and names.
fn clean_cell(raw: &str) -> String {
    raw.trim().replace('\u{200b}', "")
}

/// Resolve a general reference to its text: character references
/// (`&#38;`, `&#x26;`) and the predefined XML entities. Unknown entity
/// names resolve to nothing.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<Option<String>, GenerateError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(quick_xml::Error::from)?
    {
        return Ok(Some(ch.to_string()));
    }
    let name = reference.decode().map_err(quick_xml::Error::from)?;
    Ok(resolve_predefined_entity(&name).map(str::to_string))
}

/// Parse the document, locating the table whose immediate `caption`
/// child's text equals `caption` and extracting one record per body row.
///
/// Only the first matching table is read. A document without a matching
/// table is an error; a table body with no rows yields no entries.
pub fn parse_document(xml: &str, caption: &str) -> Result<ParsedDocument, GenerateError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    // Element depth, counting the root as 1.
    let mut depth = 0usize;

    let mut subtitle: Option<String> = None;
    let mut in_subtitle = false;
    let mut subtitle_text = String::new();

    // Depth of a table whose caption has not been read yet.
    let mut pending_table: Option<usize> = None;
    let mut in_caption = false;
    let mut caption_text = String::new();
    // Depth of the matched table while its subtree is being read.
    let mut target_table: Option<usize> = None;
    let mut found = false;

    let mut in_tbody = false;
    let mut in_row = false;
    let mut cells: Vec<String> = Vec::new();
    let mut cell: Option<CellCapture> = None;

    let mut entries = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => {
                depth += 1;
                match element.local_name().as_ref() {
                    b"subtitle" if depth == 2 && subtitle.is_none() => {
                        in_subtitle = true;
                        subtitle_text.clear();
                    }
                    b"table" if !found && target_table.is_none() => {
                        pending_table = Some(depth);
                    }
                    b"caption" if pending_table == Some(depth - 1) => {
                        in_caption = true;
                        caption_text.clear();
                    }
                    b"tbody" if target_table.is_some() => {
                        in_tbody = true;
                    }
                    b"tr" if in_tbody => {
                        in_row = true;
                        cells.clear();
                    }
                    b"para" if in_row => {
                        cell = Some(CellCapture::default());
                    }
                    b"emphasis" => {
                        if let Some(capture) = cell.as_mut() {
                            capture.saw_emphasis = true;
                            capture.in_emphasis = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(element) => match element.local_name().as_ref() {
                b"para" if in_row => {
                    cells.push(String::new());
                }
                b"emphasis" => {
                    if let Some(capture) = cell.as_mut() {
                        capture.saw_emphasis = true;
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                let text = text.xml_content().map_err(quick_xml::Error::from)?;
                if in_subtitle {
                    subtitle_text.push_str(&text);
                } else if in_caption {
                    caption_text.push_str(&text);
                } else if let Some(capture) = cell.as_mut() {
                    capture.push_text(&text);
                }
            }
            // Entity and character references arrive as separate events;
            // resolved text belongs to whatever capture is active.
            Event::GeneralRef(reference) => {
                if let Some(resolved) = resolve_reference(&reference)? {
                    if in_subtitle {
                        subtitle_text.push_str(&resolved);
                    } else if in_caption {
                        caption_text.push_str(&resolved);
                    } else if let Some(capture) = cell.as_mut() {
                        capture.push_text(&resolved);
                    }
                }
            }
            Event::End(element) => {
                match element.local_name().as_ref() {
                    b"subtitle" if in_subtitle => {
                        in_subtitle = false;
                        subtitle = Some(subtitle_text.trim().to_string());
                    }
                    b"caption" if in_caption => {
                        in_caption = false;
                        let table_depth = pending_table.take();
                        if caption_text.trim() == caption {
                            target_table = table_depth;
                            found = true;
                        }
                    }
                    b"tbody" if in_tbody => {
                        in_tbody = false;
                    }
                    b"tr" if in_row => {
                        in_row = false;
                        entries.push(UidEntry::from_cells(&cells));
                    }
                    b"para" if in_row => {
                        if let Some(capture) = cell.take() {
                            cells.push(capture.into_cell());
                        }
                    }
                    b"emphasis" => {
                        if let Some(capture) = cell.as_mut() {
                            capture.in_emphasis = false;
                        }
                    }
                    b"table" => {
                        if pending_table == Some(depth) {
                            pending_table = None;
                        }
                        if target_table == Some(depth) {
                            target_table = None;
                        }
                    }
                    _ => {}
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !found {
        return Err(GenerateError::TableNotFound {
            caption: caption.to_string(),
        });
    }

    Ok(ParsedDocument { subtitle, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTION: &str = "UID Values";

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<book xmlns="http://docbook.org/ns/docbook">
<subtitle>DICOM PS3.6 2025b - Data Dictionary</subtitle>
{body}
</book>"#
        )
    }

    fn uid_table(rows: &str) -> String {
        wrap(&format!(
            "<table><caption>UID Values</caption><thead><tr>\
             <th><para>UID Value</para></th></tr></thead>\
             <tbody>{rows}</tbody></table>"
        ))
    }

    #[test]
    fn parses_minimal_document() {
        let xml = uid_table(
            "<tr><td><para>1.2.3</para></td><td><para>Test Name</para></td>\
             <td><para/></td><td><para>SOP Class</para></td><td><para/></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(
            document.subtitle.as_deref(),
            Some("DICOM PS3.6 2025b - Data Dictionary")
        );
        assert_eq!(document.entries.len(), 1);
        let entry = &document.entries[0];
        assert_eq!(entry.value, "1.2.3");
        assert_eq!(entry.name, "Test Name");
        assert_eq!(entry.keyword, "");
        assert_eq!(entry.type_name, "SOP Class");
        assert_eq!(entry.info, "");
        assert_eq!(entry.retired, "");
    }

    #[test]
    fn emphasis_text_wins_over_para_text() {
        let xml = uid_table(
            "<tr><td><para><emphasis>1.2.3</emphasis></para></td>\
             <td><para><emphasis>Retired Name (Retired)</emphasis></para></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        let entry = &document.entries[0];
        assert_eq!(entry.value, "1.2.3");
        assert_eq!(entry.name, "Retired Name");
        assert_eq!(entry.retired, "Retired");
    }

    #[test]
    fn empty_emphasis_yields_empty_cell() {
        let xml = uid_table(
            "<tr><td><para>1.2.3</para></td><td><para><emphasis/></para></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries[0].name, "");
    }

    #[test]
    fn zero_width_spaces_are_removed() {
        let xml = uid_table(
            "<tr><td><para> 1.2\u{200b}.840\u{200b}.10008 </para></td>\
             <td><para>Name</para></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries[0].value, "1.2.840.10008");
    }

    #[test]
    fn header_rows_are_not_records() {
        let xml = uid_table("<tr><td><para>1.2.3</para></td><td><para>A</para></td></tr>");
        let document = parse_document(&xml, CAPTION).unwrap();
        // the thead row must not contribute an entry
        assert_eq!(document.entries.len(), 1);
    }

    #[test]
    fn skips_tables_with_other_captions() {
        let other = "<table><caption>Registry of DICOM Unique Identifiers</caption>\
                     <tbody><tr><td><para>9.9.9</para></td></tr></tbody></table>";
        let wanted = "<table><caption>UID Values</caption>\
                      <tbody><tr><td><para>1.2.3</para></td><td><para>Name</para></td></tr>\
                      </tbody></table>";
        let xml = wrap(&format!("{other}{wanted}"));
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries.len(), 1);
        assert_eq!(document.entries[0].value, "1.2.3");
    }

    #[test]
    fn only_first_matching_table_is_read() {
        let first = "<table><caption>UID Values</caption>\
                     <tbody><tr><td><para>1.1</para></td></tr></tbody></table>";
        let second = "<table><caption>UID Values</caption>\
                      <tbody><tr><td><para>2.2</para></td></tr></tbody></table>";
        let xml = wrap(&format!("{first}{second}"));
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries.len(), 1);
        assert_eq!(document.entries[0].value, "1.1");
    }

    #[test]
    fn missing_table_is_a_named_error() {
        let xml = wrap("<chapter><para>no tables here</para></chapter>");
        let error = parse_document(&xml, CAPTION).unwrap_err();
        assert!(matches!(
            error,
            GenerateError::TableNotFound { caption } if caption == CAPTION
        ));
    }

    #[test]
    fn empty_table_body_yields_no_entries() {
        let xml = wrap("<table><caption>UID Values</caption><tbody></tbody></table>");
        let document = parse_document(&xml, CAPTION).unwrap();
        assert!(document.entries.is_empty());
    }

    #[test]
    fn missing_subtitle_is_reported_as_none() {
        let xml = format!(
            "<book>{}</book>",
            "<table><caption>UID Values</caption><tbody></tbody></table>"
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert!(document.subtitle.is_none());
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let error = parse_document("<book><table></chapter></book>", CAPTION).unwrap_err();
        assert!(matches!(error, GenerateError::Xml(_)));
    }

    #[test]
    fn escaped_entities_are_decoded() {
        let xml = uid_table(
            "<tr><td><para>1.2.3</para></td>\
             <td><para>Image &amp; Overlay Storage</para></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        // decoding only; the ampersand substitution is a later pass. The
        // whitespace on both sides of the entity must survive.
        assert_eq!(document.entries[0].name, "Image & Overlay Storage");
    }

    #[test]
    fn character_references_are_decoded() {
        let xml = uid_table(
            "<tr><td><para>1.2.3</para></td>\
             <td><para>A &#38; B &#x26; C</para></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries[0].name, "A & B & C");
    }

    #[test]
    fn entities_inside_emphasis_stay_in_the_emphasis_cell() {
        let xml = uid_table(
            "<tr><td><para>1.2.3</para></td>\
             <td><para>ignored<emphasis>R &amp; D</emphasis></para></td></tr>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries[0].name, "R & D");
    }

    #[test]
    fn caption_with_surrounding_whitespace_matches() {
        let xml = wrap(
            "<table>\n  <caption>\n    UID Values\n  </caption>\n\
             <tbody><tr><td><para>1.2.3</para></td>\
             <td><para>Name</para></td></tr></tbody></table>",
        );
        let document = parse_document(&xml, CAPTION).unwrap();
        assert_eq!(document.entries.len(), 1);
    }
}
