//! Presentation shell for the tabular views: header controls, the row grid,
//! and the pagination bar. All windowing math lives in [`super::engine`];
//! this component just owns the per-instance state and renders the result.

use dioxus::prelude::*;

use super::column::{Column, FilterKind};
use super::engine::{self, TableState};

struct HeaderCell {
    id: &'static str,
    label: &'static str,
    sortable: bool,
    marker: Option<&'static str>,
    filter_value: String,
    show_filter: bool,
}

struct BodyRow<T: 'static> {
    row: T,
    cells: Vec<Element>,
}

#[component]
pub fn DataTable<T: Clone + PartialEq + 'static>(
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    #[props(default = 10)] page_size: usize,
    #[props(default = false)] show_search: bool,
    #[props(default = "Search...".to_string())] search_placeholder: String,
    #[props(default = false)] show_column_toggle: bool,
    #[props(default = true)] show_column_filters: bool,
    #[props(default = "No data available".to_string())] empty_message: String,
    #[props(default = false)] loading: bool,
    on_row_click: EventHandler<T>,
) -> Element {
    let mut state = use_signal({
        let columns = columns.clone();
        move || TableState::for_columns(&columns, page_size)
    });
    let mut menu_open = use_signal(|| false);

    if loading {
        return rsx! {
            div { class: "data-table__loading", div { class: "spinner" } }
        };
    }

    let snapshot = state.read().clone();
    let window = engine::compute(&rows, &columns, &snapshot);

    let visible: Vec<Column<T>> = columns
        .iter()
        .filter(|column| snapshot.is_column_visible(column.id))
        .cloned()
        .collect();

    let header_cells: Vec<HeaderCell> = visible
        .iter()
        .map(|column| HeaderCell {
            id: column.id,
            label: column.header,
            sortable: column.sortable,
            marker: snapshot
                .sort
                .as_ref()
                .filter(|sort| sort.column == column.id)
                .map(|sort| if sort.descending { "▼" } else { "▲" }),
            filter_value: snapshot
                .column_filters
                .get(column.id)
                .cloned()
                .unwrap_or_default(),
            show_filter: show_column_filters && column.filter != FilterKind::None,
        })
        .collect();

    let body_rows: Vec<BodyRow<T>> = window
        .page_rows
        .iter()
        .map(|&index| {
            let row = rows[index].clone();
            let cells = visible
                .iter()
                .map(|column| match column.cell {
                    Some(render) => render(&row),
                    None => {
                        let text = (column.accessor)(&row).display();
                        rsx! { "{text}" }
                    }
                })
                .collect();
            BodyRow { row, cells }
        })
        .collect();

    let menu_entries: Vec<(&'static str, &'static str, bool)> = columns
        .iter()
        .map(|column| {
            (
                column.id,
                column.header,
                snapshot.is_column_visible(column.id),
            )
        })
        .collect();

    let column_count = visible.len();
    let page_index = window.page_index;
    let last_page = window.page_count.saturating_sub(1);
    let page_buttons: Vec<(usize, String)> = window
        .page_numbers
        .iter()
        .map(|&page| (page, (page + 1).to_string()))
        .collect();

    rsx! {
        div { class: "data-table",
            if show_search || show_column_toggle {
                div { class: "data-table__controls",
                    if show_search {
                        input {
                            class: "data-table__search",
                            r#type: "text",
                            placeholder: "{search_placeholder}",
                            value: "{snapshot.global_query}",
                            oninput: move |evt| state.with_mut(|s| s.set_global_query(evt.value())),
                        }
                    }
                    if show_column_toggle {
                        div { class: "data-table__columns-menu",
                            button {
                                r#type: "button",
                                class: "data-table__columns-button",
                                onclick: move |_| {
                                    let open = *menu_open.peek();
                                    menu_open.set(!open);
                                },
                                "Columns ▾"
                            }
                            if menu_open() {
                                div { class: "data-table__columns-dropdown",
                                    for (id, title, visible) in menu_entries.into_iter() {
                                        label { class: "data-table__columns-item",
                                            input {
                                                r#type: "checkbox",
                                                checked: visible,
                                                onchange: move |_| state.with_mut(|s| s.toggle_column(id)),
                                            }
                                            "{title}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "data-table__scroll",
                table { class: "data-table__grid",
                    thead {
                        tr {
                            for cell in header_cells.into_iter() {
                                {render_header_cell(cell, state)}
                            }
                        }
                    }
                    tbody {
                        if body_rows.is_empty() {
                            tr {
                                td {
                                    class: "data-table__empty",
                                    colspan: "{column_count}",
                                    "{empty_message}"
                                }
                            }
                        } else {
                            for entry in body_rows.into_iter() {
                                {render_body_row(entry, on_row_click)}
                            }
                        }
                    }
                }
            }

            if window.filtered_count > 0 {
                div { class: "data-table__pagination",
                    span { class: "data-table__pagination-summary",
                        "Showing {window.showing_from} to {window.showing_to} of {window.filtered_count} results"
                    }
                    nav { class: "data-table__pages",
                        button {
                            r#type: "button",
                            class: "data-table__page",
                            disabled: page_index == 0,
                            onclick: move |_| state.with_mut(|s| s.page_index = 0),
                            "«"
                        }
                        button {
                            r#type: "button",
                            class: "data-table__page",
                            disabled: page_index == 0,
                            onclick: move |_| state.with_mut(|s| s.page_index = page_index.saturating_sub(1)),
                            "‹"
                        }
                        for (page, number) in page_buttons.into_iter() {
                            button {
                                r#type: "button",
                                class: if page == page_index {
                                    "data-table__page data-table__page--current"
                                } else {
                                    "data-table__page"
                                },
                                onclick: move |_| state.with_mut(|s| s.page_index = page),
                                "{number}"
                            }
                        }
                        button {
                            r#type: "button",
                            class: "data-table__page",
                            disabled: page_index >= last_page,
                            onclick: move |_| state.with_mut(|s| s.page_index = (page_index + 1).min(last_page)),
                            "›"
                        }
                        button {
                            r#type: "button",
                            class: "data-table__page",
                            disabled: page_index >= last_page,
                            onclick: move |_| state.with_mut(|s| s.page_index = last_page),
                            "»"
                        }
                    }
                }
            }
        }
    }
}

fn render_header_cell(cell: HeaderCell, mut state: Signal<TableState>) -> Element {
    let HeaderCell {
        id,
        label,
        sortable,
        marker,
        filter_value,
        show_filter,
    } = cell;

    rsx! {
        th { class: "data-table__header",
            div {
                class: if sortable {
                    "data-table__header-label data-table__header-label--sortable"
                } else {
                    "data-table__header-label"
                },
                onclick: move |_| {
                    if sortable {
                        state.with_mut(|s| s.toggle_sort(id));
                    }
                },
                "{label}"
                if let Some(marker) = marker {
                    span { class: "data-table__sort-marker", "{marker}" }
                }
            }
            if show_filter {
                input {
                    class: "data-table__filter",
                    r#type: "text",
                    placeholder: "Filter...",
                    value: "{filter_value}",
                    oninput: move |evt| state.with_mut(|s| s.set_column_filter(id, evt.value())),
                    onclick: move |evt| evt.stop_propagation(),
                }
            }
        }
    }
}

fn render_body_row<T: Clone + PartialEq + 'static>(
    entry: BodyRow<T>,
    on_row_click: EventHandler<T>,
) -> Element {
    let BodyRow { row, cells } = entry;

    rsx! {
        tr {
            class: "data-table__row data-table__row--clickable",
            onclick: move |_| on_row_click.call(row.clone()),
            for cell in cells.into_iter() {
                td { class: "data-table__cell", {cell} }
            }
        }
    }
}
