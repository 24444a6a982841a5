//! Render the record sequence as a generated Rust source file.

use std::path::Path;

use crate::error::GenerateError;
use crate::model::UidEntry;

/// Name of the static table in the generated file.
pub const DICT_NAME: &str = "UID_DICTIONARY";

/// Render the full generated source: a header naming the generator and
/// the ordering, a comment giving the tuple field order, and one line
/// per entry. Entries are sorted ascending by UID value before rendering
/// so a rerun against the same document is byte-identical.
pub fn render(entries: &[UidEntry]) -> String {
    let mut sorted: Vec<&UidEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.value.cmp(&b.value));

    let mut out = String::new();
    out.push_str("//! DICOM UID dictionary, auto-generated by uid-dict-gen. Do not edit.\n");
    out.push_str("//!\n");
    out.push_str("//! Entries are sorted in ascending order of UID value.\n\n");
    out.push_str("// Each entry is UID: (Name, Type, Info, Retired, Keyword)\n");
    out.push_str(&format!(
        "pub static {DICT_NAME}: &[(&str, (&str, &str, &str, &str, &str))] = &[\n"
    ));
    for entry in sorted {
        out.push_str(&format!(
            "    ({}, ({}, {}, {}, {}, {})),\n",
            quote(&entry.value),
            quote(&entry.name),
            quote(&entry.type_name),
            quote(&entry.info),
            quote(&entry.retired),
            quote(&entry.keyword),
        ));
    }
    out.push_str("];\n");
    out
}

/// Overwrite `path` with the rendered dictionary. The file is only
/// opened once all records are ready; nothing is written on earlier
/// failures.
pub fn write_dictionary(path: &Path, contents: &str) -> Result<(), GenerateError> {
    std::fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Quote a field as a Rust string literal.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
