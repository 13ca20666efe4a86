use api::StoreAdmin;
use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner, StatCard, TopBar};
use crate::core::{fetch, format, handoff};
use crate::table::{CellValue, Column, DataTable, FilterKind};

fn columns() -> Vec<Column<StoreAdmin>> {
    vec![
        Column::new("storageName", "NAME", |store: &StoreAdmin| {
            CellValue::text(store.cold_storage_details.cold_storage_name.as_str())
        }),
        Column::new("location", "LOCATION", |store: &StoreAdmin| {
            CellValue::text(store.cold_storage_details.cold_storage_address.as_str())
        }),
        Column::new("capacity", "CAPACITY", |store: &StoreAdmin| {
            CellValue::number(store.cold_storage_details.capacity)
        })
        .render(|store: &StoreAdmin| {
            rsx! { "{store.cold_storage_details.capacity} bags" }
        }),
        Column::new("ownerName", "OWNER", |store: &StoreAdmin| {
            CellValue::text(store.name.as_str())
        }),
        Column::new("contact", "CONTACT", |store: &StoreAdmin| {
            CellValue::text(store.cold_storage_details.cold_storage_contact_number.as_str())
        })
        .not_sortable(),
        Column::new("status", "STATUS", |store: &StoreAdmin| {
            CellValue::text(if store.is_active { "Active" } else { "Inactive" })
        })
        .filter(FilterKind::Substring)
        .render(|store: &StoreAdmin| {
            rsx! {
                span {
                    class: if store.is_active { "badge badge--green" } else { "badge badge--red" },
                    if store.is_active { "Active" } else { "Inactive" }
                }
            }
        }),
    ]
}

#[component]
pub fn ColdStoragesView() -> Element {
    let storages = fetch::use_api_resource(|client| async move { client.cold_storages().await });

    let body = match &*storages.read_unchecked() {
        None => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Some(Err(_)) => rsx! {
            ErrorBanner { message: "Failed to load cold storage data. Please try again later." }
        },
        Some(Ok(storages)) => {
            let total = storages.len();
            let farmers: usize = storages
                .iter()
                .map(|store| store.registered_farmers.len())
                .sum();
            let active = storages.iter().filter(|store| store.is_active).count();

            rsx! {
                div { class: "card-grid card-grid--three",
                    StatCard { label: "Total Cold Storages", value: "{total}" }
                    StatCard {
                        label: "Total Registered Farmers",
                        value: format::format_count(farmers as u32),
                    }
                    StatCard { label: "Active Store Admins", value: "{active}" }
                }

                div { class: "panel",
                    div { class: "panel__header",
                        h2 { "Cold Storage List" }
                    }
                    DataTable::<StoreAdmin> {
                        columns: columns(),
                        rows: storages.clone(),
                        show_search: true,
                        search_placeholder: "Search cold storages...",
                        empty_message: "No cold storage data available.",
                        on_row_click: move |store: StoreAdmin| {
                            let id = store.id.clone();
                            handoff::stash_cold_storage(store);
                            nav::go_cold_storage(&id);
                        },
                    }
                }
            }
        }
    };

    rsx! {
        TopBar { title: "Cold Storages" }
        main { class: "screen", {body} }
    }
}
