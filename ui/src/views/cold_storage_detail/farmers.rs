//! Farmers tab: registered farmers for one storage. The id, name, address,
//! and mobile columns use plain substring filters instead of the fuzzy
//! default so partial phone numbers and ids match predictably.

use api::{Farmer, StoreAdmin};
use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner};
use crate::core::{fetch, format, handoff};
use crate::table::{CellValue, Column, DataTable, FilterKind};

fn columns() -> Vec<Column<Farmer>> {
    vec![
        Column::new("farmerId", "FARMER ID", |farmer: &Farmer| {
            CellValue::text(farmer.farmer_id.as_str())
        })
        .filter(FilterKind::Substring),
        Column::new("name", "NAME", |farmer: &Farmer| {
            CellValue::text(farmer.name.as_str())
        })
        .filter(FilterKind::Substring),
        Column::new("address", "ADDRESS", |farmer: &Farmer| {
            CellValue::text(farmer.address.as_str())
        })
        .filter(FilterKind::Substring),
        Column::new("mobileNumber", "MOBILE NUMBER", |farmer: &Farmer| {
            CellValue::text(farmer.mobile_number.as_str())
        })
        .filter(FilterKind::Substring),
        Column::new("status", "STATUS", |farmer: &Farmer| {
            CellValue::text(if farmer.is_verified {
                "Verified"
            } else {
                "Unverified"
            })
        })
        .filter(FilterKind::Substring)
        .render(|farmer: &Farmer| {
            rsx! {
                span {
                    class: if farmer.is_verified { "badge badge--green" } else { "badge badge--outline" },
                    if farmer.is_verified { "Verified" } else { "Unverified" }
                }
            }
        }),
        Column::new("createdAt", "REGISTRATION DATE", |farmer: &Farmer| {
            CellValue::text(format::format_timestamp(&farmer.created_at))
        })
        .filter(FilterKind::None),
    ]
}

#[component]
pub fn FarmersTab(store: StoreAdmin) -> Element {
    let storage_id = store.id.clone();
    let farmers = fetch::use_api_resource({
        let id = storage_id.clone();
        move |client| {
            let id = id.clone();
            async move { client.farmers(&id).await }
        }
    });

    match &*farmers.read_unchecked() {
        None => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Some(Err(_)) => rsx! {
            ErrorBanner { message: "Failed to load farmers. Please try again later." }
        },
        Some(Ok(farmers)) => rsx! {
            DataTable::<Farmer> {
                columns: columns(),
                rows: farmers.clone(),
                show_search: true,
                search_placeholder: "Search farmers...",
                empty_message: "No registered farmers yet.",
                on_row_click: move |farmer: Farmer| {
                    let farmer_id = farmer.id.clone();
                    handoff::stash_farmer(farmer);
                    nav::go_farmer(&storage_id, &farmer_id);
                },
            }
        },
    }
}
