use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner, Spinner, StatCard, TopBar};
use crate::core::{fetch, format};

#[component]
pub fn DashboardView() -> Element {
    let storages = fetch::use_api_resource(|client| async move { client.cold_storages().await });

    let body = match &*storages.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: "Failed to load dashboard data: {err}" }
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
                    StatCard {
                        label: "Total Cold Storages",
                        value: "{total}",
                    }
                    StatCard {
                        label: "Total Registered Farmers",
                        value: format::format_count(farmers as u32),
                    }
                    StatCard {
                        label: "Active Store Admins",
                        value: "{active}",
                    }
                }

                div { class: "panel",
                    div { class: "panel__header",
                        h2 { "Cold storage network" }
                    }
                    p { class: "panel__note",
                        "Browse the facilities to review stock, farmers, and receipts."
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| nav::go_cold_storages(),
                        "View cold storages"
                    }
                }
            }
        }
    };

    rsx! {
        TopBar { title: "Dashboard" }
        main { class: "screen", {body} }
    }
}
