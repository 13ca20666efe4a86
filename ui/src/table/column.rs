//! Declarative column schema for [`DataTable`](super::DataTable).
//!
//! A column maps an entity field (or derived value) to a display cell. The
//! accessor feeds sorting and filtering; an optional renderer overrides the
//! plain-text cell. Accessors and renderers are plain `fn` pointers so column
//! lists stay `Clone + PartialEq` and can be handed to components as props.

use dioxus::prelude::*;

/// Value a column extracts from a row. Numbers sort numerically, text sorts
/// case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn number(value: impl Into<f64>) -> Self {
        CellValue::Number(value.into())
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{n}"),
        }
    }
}

/// How a column's filter input matches its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    /// Ranked match: equality, prefix, substring, then in-order subsequence.
    #[default]
    Fuzzy,
    /// Case-insensitive substring match.
    Substring,
    /// Exact string equality (voucher numbers).
    Exact,
    /// No filter input for this column.
    None,
}

#[derive(Clone, PartialEq)]
pub struct Column<T: 'static> {
    pub id: &'static str,
    pub header: &'static str,
    pub accessor: fn(&T) -> CellValue,
    /// Custom cell renderer; falls back to the accessor's display text.
    pub cell: Option<fn(&T) -> Element>,
    pub sortable: bool,
    pub filter: FilterKind,
    /// Start hidden until toggled on via the column-visibility menu.
    pub hidden: bool,
}

impl<T> Column<T> {
    pub fn new(id: &'static str, header: &'static str, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            id,
            header,
            accessor,
            cell: None,
            sortable: true,
            filter: FilterKind::Fuzzy,
            hidden: false,
        }
    }

    pub fn render(mut self, cell: fn(&T) -> Element) -> Self {
        self.cell = Some(cell);
        self
    }

    pub fn filter(mut self, kind: FilterKind) -> Self {
        self.filter = kind;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn hidden_by_default(mut self) -> Self {
        self.hidden = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_cells_display_without_trailing_zeroes() {
        assert_eq!(CellValue::number(50000u32).display(), "50000");
        assert_eq!(CellValue::Number(62.5).display(), "62.5");
        assert_eq!(CellValue::text("B-4").display(), "B-4");
    }
}
