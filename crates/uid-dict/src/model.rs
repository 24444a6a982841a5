//! The six-field UID record and its column schema.

/// Number of columns in the UID registry table schema.
///
/// Cells map positionally: value, name, keyword, type, info, retired.
/// A row with fewer cells gets empty strings for the missing trailing
/// positions; extra cells are dropped.
pub const COLUMN_COUNT: usize = 6;

/// One row of the UID registry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UidEntry {
    /// The unique identifier string, the key of the generated dictionary.
    pub value: String,
    /// Human-readable display name.
    pub name: String,
    /// Short programmatic identifier.
    pub keyword: String,
    /// Classification from the table's type column, e.g. "SOP Class".
    pub type_name: String,
    /// Supplementary note, empty unless extracted from the name.
    pub info: String,
    /// `"Retired"` for deprecated identifiers, otherwise empty. The
    /// sentinel string matches the generated file's literal formatting.
    pub retired: String,
}

impl UidEntry {
    /// Build an entry from the positional cells of one table row.
    ///
    /// `info` and `retired` always start empty, then two inference rules
    /// run over the name:
    /// - a `(Retired)` marker in the name sets `retired` and is stripped;
    /// - a colon splits the name into name (before) and keyword (after),
    ///   on the first colon.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |index: usize| cells.get(index).cloned().unwrap_or_default();

        let value = cell(0);
        let mut name = cell(1);
        let mut keyword = cell(2);
        let type_name = cell(3);
        let info = String::new();
        let mut retired = String::new();

        if name.contains("(Retired)") {
            retired = "Retired".to_string();
            name = name.replace("(Retired)", "").trim().to_string();
        }

        if let Some((head, tail)) = name.split_once(':') {
            keyword = tail.trim().to_string();
            name = head.trim().to_string();
        }

        Self {
            value,
            name,
            keyword,
            type_name,
            info,
            retired,
        }
    }
}
