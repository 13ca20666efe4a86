//! Incoming-orders tab. Polled every few seconds so fulfilment status stays
//! near-live while vouchers are being processed at the gate.

use api::{IncomingOrder, StoreAdmin};
use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner};
use crate::core::{fetch, handoff};
use crate::table::{CellValue, Column, DataTable, FilterKind};

const POLL_INTERVAL_MS: u64 = 3_000;

fn columns() -> Vec<Column<IncomingOrder>> {
    vec![
        Column::new("voucherNumber", "VOUCHER", |order: &IncomingOrder| {
            CellValue::text(order.voucher.voucher_number.to_string())
        })
        // exact match so "10" doesn't pull in vouchers 104 and 110
        .filter(FilterKind::Exact)
        .render(|order: &IncomingOrder| {
            rsx! {
                span { class: "cell-strong", "{order.voucher.kind} #{order.voucher.voucher_number}" }
            }
        }),
        Column::new("dateOfSubmission", "SUBMISSION DATE", |order: &IncomingOrder| {
            CellValue::text(order.date_of_submission.as_str())
        }),
        Column::new("variety", "VARIETY", |order: &IncomingOrder| {
            CellValue::text(order.varieties())
        })
        .filter(FilterKind::Substring),
        Column::new("totalBags", "TOTAL BAGS", |order: &IncomingOrder| {
            CellValue::number(order.total_initial())
        }),
        Column::new("bagSizes", "BAG DETAILS", |order: &IncomingOrder| {
            CellValue::text(
                order
                    .order_details
                    .iter()
                    .flat_map(|detail| &detail.bag_sizes)
                    .map(|bag| format!("{}: {}", bag.size, bag.quantity.current_quantity))
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        })
        .not_sortable()
        .filter(FilterKind::None)
        .render(|order: &IncomingOrder| {
            rsx! {
                div { class: "badge-stack",
                    for detail in order.order_details.clone().into_iter() {
                        for bag in detail.bag_sizes.into_iter() {
                            span { class: "badge badge--outline",
                                "{bag.size}: {bag.quantity.current_quantity}"
                            }
                        }
                    }
                }
            }
        }),
        Column::new("location", "LOCATION", |order: &IncomingOrder| {
            CellValue::text(order.locations())
        })
        .filter(FilterKind::Substring),
        Column::new("status", "STATUS", |order: &IncomingOrder| {
            CellValue::text(if order.fulfilled {
                "Fulfilled"
            } else {
                "Pending"
            })
        })
        .filter(FilterKind::Substring)
        .render(|order: &IncomingOrder| {
            rsx! {
                span {
                    class: if order.fulfilled { "badge badge--green" } else { "badge badge--amber" },
                    if order.fulfilled { "Fulfilled" } else { "Pending" }
                }
            }
        }),
        Column::new("remarks", "REMARKS", |order: &IncomingOrder| {
            CellValue::text(order.remarks.as_str())
        })
        .not_sortable()
        .render(|order: &IncomingOrder| {
            rsx! {
                span { class: "cell-muted cell-truncate", "{order.remarks}" }
            }
        }),
    ]
}

#[component]
pub fn IncomingOrdersTab(store: StoreAdmin) -> Element {
    let storage_id = store.id.clone();
    let orders = fetch::use_polled_resource(POLL_INTERVAL_MS, {
        let id = storage_id.clone();
        move |client| {
            let id = id.clone();
            async move { client.incoming_orders(&id).await }
        }
    });

    match &*orders.read_unchecked() {
        None => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Some(Err(_)) => rsx! {
            ErrorBanner { message: "Failed to load incoming orders. Please try again later." }
        },
        Some(Ok(orders)) => rsx! {
            DataTable::<IncomingOrder> {
                columns: columns(),
                rows: orders.clone(),
                show_search: true,
                search_placeholder: "Search incoming orders...",
                empty_message: "No incoming orders recorded.",
                on_row_click: move |order: IncomingOrder| {
                    let order_id = order.id.clone();
                    handoff::stash_incoming_order(order);
                    nav::go_incoming_receipt(&storage_id, &order_id);
                },
            }
        },
    }
}
