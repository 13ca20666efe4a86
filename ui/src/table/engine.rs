//! Pure row-windowing logic: turns `(rows, columns, state)` into the visible
//! page. Kept free of Dioxus so the table behavior is testable as plain
//! functions. Pagination is client-side over the fully fetched collection.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::column::{CellValue, Column, FilterKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub sort: Option<Sort>,
    pub global_query: String,
    pub column_filters: HashMap<String, String>,
    pub hidden_columns: HashSet<String>,
    pub page_index: usize,
    pub page_size: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            global_query: String::new(),
            column_filters: HashMap::new(),
            hidden_columns: HashSet::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Seed the hidden set from columns that start hidden.
    pub fn for_columns<T>(columns: &[Column<T>], page_size: usize) -> Self {
        let mut state = Self::new(page_size);
        state.hidden_columns = columns
            .iter()
            .filter(|column| column.hidden)
            .map(|column| column.id.to_string())
            .collect();
        state
    }

    /// Cycle the sort on a column: ascending, descending, then off.
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column == column_id && !sort.descending => Some(Sort {
                column: sort.column,
                descending: true,
            }),
            Some(sort) if sort.column == column_id => None,
            _ => Some(Sort {
                column: column_id.to_string(),
                descending: false,
            }),
        };
    }

    pub fn set_global_query(&mut self, query: impl Into<String>) {
        self.global_query = query.into();
        self.page_index = 0;
    }

    pub fn set_column_filter(&mut self, column_id: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.column_filters.remove(column_id);
        } else {
            self.column_filters.insert(column_id.to_string(), value);
        }
        self.page_index = 0;
    }

    pub fn toggle_column(&mut self, column_id: &str) {
        if !self.hidden_columns.remove(column_id) {
            self.hidden_columns.insert(column_id.to_string());
        }
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        !self.hidden_columns.contains(column_id)
    }
}

/// The computed page of rows, as indices into the caller's row slice.
#[derive(Debug, Clone, PartialEq)]
pub struct RowWindow {
    pub page_rows: Vec<usize>,
    pub filtered_count: usize,
    pub page_count: usize,
    /// Requested page clamped to the filtered set.
    pub page_index: usize,
    /// 1-based bounds for "Showing X to Y of Z"; zero when empty.
    pub showing_from: usize,
    pub showing_to: usize,
    /// Numbered page buttons, at most five, centered on the current page.
    pub page_numbers: Vec<usize>,
}

pub fn visible_columns<'a, T>(columns: &'a [Column<T>], state: &TableState) -> Vec<&'a Column<T>> {
    columns
        .iter()
        .filter(|column| state.is_column_visible(column.id))
        .collect()
}

/// Ranked fuzzy match, highest first: 4 equal, 3 prefix, 2 substring,
/// 1 in-order subsequence. `None` means no match. Case-insensitive.
pub fn fuzzy_rank(value: &str, query: &str) -> Option<u8> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Some(4);
    }
    let value = value.to_lowercase();
    if value == query {
        return Some(4);
    }
    if value.starts_with(&query) {
        return Some(3);
    }
    if value.contains(&query) {
        return Some(2);
    }
    let mut needle = query.chars().peekable();
    for ch in value.chars() {
        if needle.peek() == Some(&ch) {
            needle.next();
        }
    }
    (needle.peek().is_none()).then_some(1)
}

fn column_filter_passes(kind: FilterKind, cell: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    match kind {
        FilterKind::Fuzzy => fuzzy_rank(cell, query).is_some(),
        FilterKind::Substring => cell.to_lowercase().contains(&query.to_lowercase()),
        FilterKind::Exact => cell == query,
        FilterKind::None => true,
    }
}

fn row_passes<T>(row: &T, visible: &[&Column<T>], state: &TableState) -> bool {
    for column in visible {
        if let Some(query) = state.column_filters.get(column.id) {
            if !column_filter_passes(column.filter, &(column.accessor)(row).display(), query) {
                return false;
            }
        }
    }

    if state.global_query.trim().is_empty() {
        return true;
    }
    visible
        .iter()
        .any(|column| fuzzy_rank(&(column.accessor)(row).display(), &state.global_query).is_some())
}

fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (CellValue::Text(x), CellValue::Text(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ => a.display().cmp(&b.display()),
    }
}

pub fn compute<T>(rows: &[T], columns: &[Column<T>], state: &TableState) -> RowWindow {
    let visible = visible_columns(columns, state);

    let mut indices: Vec<usize> = (0..rows.len())
        .filter(|&i| row_passes(&rows[i], &visible, state))
        .collect();

    if let Some(sort) = &state.sort {
        if let Some(column) = columns.iter().find(|column| column.id == sort.column) {
            // Vec::sort_by is stable, so equal keys keep their fetch order.
            indices.sort_by(|&a, &b| {
                let ordering =
                    compare_cells(&(column.accessor)(&rows[a]), &(column.accessor)(&rows[b]));
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
    }

    let filtered_count = indices.len();
    let page_size = state.page_size.max(1);
    let page_count = filtered_count.div_ceil(page_size);
    let page_index = state.page_index.min(page_count.saturating_sub(1));
    let start = page_index * page_size;
    let end = (start + page_size).min(filtered_count);

    RowWindow {
        page_rows: indices[start..end].to_vec(),
        filtered_count,
        page_count,
        page_index,
        showing_from: if filtered_count == 0 { 0 } else { start + 1 },
        showing_to: end,
        page_numbers: page_number_window(page_count, page_index),
    }
}

/// At most five numbered buttons: all pages when few, otherwise a window of
/// five pinned to the ends and centered on the current page.
fn page_number_window(page_count: usize, page_index: usize) -> Vec<usize> {
    if page_count <= 5 {
        (0..page_count).collect()
    } else if page_index < 3 {
        (0..5).collect()
    } else if page_index >= page_count - 3 {
        (page_count - 5..page_count).collect()
    } else {
        (page_index - 2..=page_index + 2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq)]
    struct Row {
        name: &'static str,
        bags: u32,
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                name: ["Anil", "Bhola", "Chandan", "Devraj"][i % 4],
                bags: (i as u32 + 1) * 10,
            })
            .collect()
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |row: &Row| CellValue::text(row.name))
                .filter(FilterKind::Substring),
            Column::new("bags", "Bags", |row: &Row| CellValue::number(row.bags)),
        ]
    }

    #[test]
    fn first_page_shows_min_of_page_size_and_rows() {
        let rows = rows(23);
        let state = TableState::new(10);
        let window = compute(&rows, &columns(), &state);
        assert_eq!(window.page_rows.len(), 10);
        assert_eq!(window.page_count, 3);
        assert_eq!((window.showing_from, window.showing_to), (1, 10));

        let few = &rows[..4];
        let window = compute(few, &columns(), &state);
        assert_eq!(window.page_rows.len(), 4);
        assert_eq!(window.page_count, 1);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let rows = rows(23);
        let mut state = TableState::new(10);
        state.page_index = 2;
        let window = compute(&rows, &columns(), &state);
        assert_eq!(window.page_rows.len(), 3);
        assert_eq!((window.showing_from, window.showing_to), (21, 23));
    }

    #[test]
    fn substring_filter_keeps_exactly_matching_rows() {
        let rows = rows(12); // three full name cycles
        let mut state = TableState::new(10);
        state.set_column_filter("name", "bho");
        let window = compute(&rows, &columns(), &state);
        assert_eq!(window.filtered_count, 3);
        assert!(window
            .page_rows
            .iter()
            .all(|&i| rows[i].name.to_lowercase().contains("bho")));
    }

    #[test]
    fn page_index_clamps_when_filters_shrink_the_set() {
        let rows = rows(40);
        let mut state = TableState::new(10);
        state.page_index = 3;
        state.set_column_filter("name", "anil");
        // set_column_filter resets the page, but clamp independently too
        state.page_index = 3;
        let window = compute(&rows, &columns(), &state);
        assert_eq!(window.page_index, 0);
        assert_eq!(window.filtered_count, 10);
    }

    #[test]
    fn hiding_a_column_removes_it_without_touching_rows() {
        let rows = rows(8);
        let cols = columns();
        let mut state = TableState::new(10);
        state.toggle_column("bags");
        assert_eq!(visible_columns(&cols, &state).len(), 1);
        let window = compute(&rows, &cols, &state);
        assert_eq!(window.filtered_count, 8);
        state.toggle_column("bags");
        assert_eq!(visible_columns(&cols, &state).len(), 2);
    }

    #[test]
    fn hidden_columns_do_not_feed_the_global_filter() {
        let rows = rows(8);
        let cols = columns();
        let mut state = TableState::new(10);
        state.set_global_query("40");
        assert_eq!(compute(&rows, &cols, &state).filtered_count, 1);
        state.toggle_column("bags");
        assert_eq!(compute(&rows, &cols, &state).filtered_count, 0);
    }

    #[test]
    fn numeric_sort_is_numeric_and_stable() {
        let rows = vec![
            Row {
                name: "Anil",
                bags: 900,
            },
            Row {
                name: "Bhola",
                bags: 80,
            },
            Row {
                name: "Chandan",
                bags: 80,
            },
        ];
        let mut state = TableState::new(10);
        state.toggle_sort("bags");
        let window = compute(&rows, &columns(), &state);
        // string sort would put "80" before "900"; numeric keeps 80 < 900,
        // and the two 80s keep their original relative order
        assert_eq!(window.page_rows, vec![1, 2, 0]);

        state.toggle_sort("bags");
        let window = compute(&rows, &columns(), &state);
        assert_eq!(window.page_rows, vec![0, 1, 2]);

        state.toggle_sort("bags");
        assert!(state.sort.is_none());
    }

    #[test]
    fn fuzzy_rank_orders_match_quality() {
        assert_eq!(fuzzy_rank("Kufri Jyoti", "kufri jyoti"), Some(4));
        assert_eq!(fuzzy_rank("Kufri Jyoti", "kuf"), Some(3));
        assert_eq!(fuzzy_rank("Kufri Jyoti", "jyo"), Some(2));
        assert_eq!(fuzzy_rank("Kufri Jyoti", "kj"), Some(1));
        assert_eq!(fuzzy_rank("Kufri Jyoti", "xyz"), None);
    }

    #[test]
    fn page_number_window_pins_to_the_ends() {
        assert_eq!(page_number_window(3, 0), vec![0, 1, 2]);
        assert_eq!(page_number_window(9, 0), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_number_window(9, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_number_window(9, 8), vec![4, 5, 6, 7, 8]);
    }
}
