//! Outgoing-orders tab. Location comes off the referenced incoming order
//! since deliveries are always drawn from a stored lot.

use api::{OutgoingOrder, StoreAdmin};
use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner};
use crate::core::{fetch, handoff};
use crate::table::{CellValue, Column, DataTable, FilterKind};

fn columns() -> Vec<Column<OutgoingOrder>> {
    vec![
        Column::new("voucherNumber", "VOUCHER", |order: &OutgoingOrder| {
            CellValue::text(order.voucher.voucher_number.to_string())
        })
        .filter(FilterKind::Exact)
        .render(|order: &OutgoingOrder| {
            rsx! {
                span { class: "cell-strong", "{order.voucher.kind} #{order.voucher.voucher_number}" }
            }
        }),
        Column::new("dateOfExtraction", "EXTRACTION DATE", |order: &OutgoingOrder| {
            CellValue::text(order.date_of_extraction.as_str())
        }),
        Column::new("variety", "VARIETY", |order: &OutgoingOrder| {
            CellValue::text(order.varieties())
        })
        .filter(FilterKind::Substring),
        Column::new("totalRemoved", "TOTAL BAGS EXTRACTED", |order: &OutgoingOrder| {
            CellValue::number(order.total_removed())
        }),
        Column::new("bagSizes", "BAG DETAILS", |order: &OutgoingOrder| {
            CellValue::text(
                order
                    .order_details
                    .iter()
                    .flat_map(|detail| &detail.bag_sizes)
                    .map(|bag| format!("{}: {}", bag.size, bag.quantity_removed))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })
        .not_sortable()
        .filter(FilterKind::None)
        .render(|order: &OutgoingOrder| {
            rsx! {
                div { class: "badge-stack",
                    for detail in order.order_details.clone().into_iter() {
                        for bag in detail.bag_sizes.into_iter() {
                            span { class: "badge badge--outline", "{bag.size}: {bag.quantity_removed}" }
                        }
                    }
                }
            }
        }),
        Column::new("location", "LOCATION", |order: &OutgoingOrder| {
            CellValue::text(order.locations())
        })
        .filter(FilterKind::Substring),
        Column::new("remarks", "REMARKS", |order: &OutgoingOrder| {
            CellValue::text(order.remarks.as_str())
        })
        .not_sortable()
        .render(|order: &OutgoingOrder| {
            rsx! {
                span { class: "cell-muted cell-truncate", "{order.remarks}" }
            }
        }),
    ]
}

#[component]
pub fn OutgoingOrdersTab(store: StoreAdmin) -> Element {
    let storage_id = store.id.clone();
    let orders = fetch::use_api_resource({
        let id = storage_id.clone();
        move |client| {
            let id = id.clone();
            async move { client.outgoing_orders(&id).await }
        }
    });

    match &*orders.read_unchecked() {
        None => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Some(Err(_)) => rsx! {
            ErrorBanner { message: "Failed to load outgoing orders. Please try again later." }
        },
        Some(Ok(orders)) => rsx! {
            DataTable::<OutgoingOrder> {
                columns: columns(),
                rows: orders.clone(),
                show_search: true,
                search_placeholder: "Search outgoing orders...",
                empty_message: "No outgoing orders recorded.",
                on_row_click: move |order: OutgoingOrder| {
                    let order_id = order.id.clone();
                    handoff::stash_outgoing_order(order);
                    nav::go_outgoing_receipt(&storage_id, &order_id);
                },
            }
        },
    }
}
