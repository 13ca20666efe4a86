//! Table behavior over realistic order rows, driven through the public
//! engine API the DataTable component renders from.

use ui::table::{engine, CellValue, Column, FilterKind, TableState};

#[derive(Clone, PartialEq)]
struct OrderRow {
    voucher: u32,
    variety: &'static str,
    location: &'static str,
}

fn columns() -> Vec<Column<OrderRow>> {
    vec![
        Column::new("voucher", "VOUCHER", |row: &OrderRow| {
            CellValue::text(row.voucher.to_string())
        })
        .filter(FilterKind::Exact),
        Column::new("variety", "VARIETY", |row: &OrderRow| {
            CellValue::text(row.variety)
        })
        .filter(FilterKind::Substring),
        Column::new("location", "LOCATION", |row: &OrderRow| {
            CellValue::text(row.location)
        })
        .filter(FilterKind::Substring),
    ]
}

fn orders() -> Vec<OrderRow> {
    vec![
        OrderRow {
            voucher: 101,
            variety: "Kufri Jyoti",
            location: "A-1",
        },
        OrderRow {
            voucher: 102,
            variety: "Kufri Bahar",
            location: "B-4",
        },
        OrderRow {
            voucher: 103,
            variety: "Kufri Jyoti",
            location: "B-4",
        },
    ]
}

#[test]
fn global_search_narrows_to_the_matching_voucher() {
    let rows = orders();
    let cols = columns();
    let mut state = TableState::new(10);

    state.set_global_query("102");
    let window = engine::compute(&rows, &cols, &state);
    assert_eq!(window.filtered_count, 1);
    assert_eq!(rows[window.page_rows[0]].voucher, 102);

    // clearing the search restores the full collection
    state.set_global_query("");
    let window = engine::compute(&rows, &cols, &state);
    assert_eq!(window.filtered_count, 3);
}

#[test]
fn exact_voucher_filter_ignores_partial_matches() {
    let rows = orders();
    let cols = columns();
    let mut state = TableState::new(10);

    state.set_column_filter("voucher", "10");
    assert_eq!(engine::compute(&rows, &cols, &state).filtered_count, 0);

    state.set_column_filter("voucher", "102");
    let window = engine::compute(&rows, &cols, &state);
    assert_eq!(window.filtered_count, 1);
    assert_eq!(rows[window.page_rows[0]].voucher, 102);
}

#[test]
fn location_filter_keeps_every_matching_row() {
    let rows = orders();
    let cols = columns();
    let mut state = TableState::new(10);

    state.set_column_filter("location", "b-4");
    let window = engine::compute(&rows, &cols, &state);
    assert_eq!(window.filtered_count, 2);
}

#[test]
fn paging_a_large_collection() {
    let rows: Vec<OrderRow> = (0..57)
        .map(|i| OrderRow {
            voucher: 100 + i,
            variety: "Kufri Jyoti",
            location: "A-1",
        })
        .collect();
    let cols = columns();
    let mut state = TableState::new(10);

    let window = engine::compute(&rows, &cols, &state);
    assert_eq!(window.page_rows.len(), 10);
    assert_eq!(window.page_count, 6);
    assert_eq!(window.page_numbers, vec![0, 1, 2, 3, 4]);

    state.page_index = 5;
    let window = engine::compute(&rows, &cols, &state);
    assert_eq!(window.page_rows.len(), 7);
    assert_eq!((window.showing_from, window.showing_to), (51, 57));
    assert_eq!(window.page_numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn hiding_the_variety_column_drops_it_from_the_header_set() {
    let rows = orders();
    let cols = columns();
    let mut state = TableState::new(10);

    state.toggle_column("variety");
    let visible = engine::visible_columns(&cols, &state);
    assert_eq!(
        visible.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec!["voucher", "location"]
    );
    // row data is untouched by visibility
    assert_eq!(engine::compute(&rows, &cols, &state).filtered_count, 3);
}
