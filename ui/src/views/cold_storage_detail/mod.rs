//! Cold-storage detail screen: info cards plus the Overview / Farmers /
//! Incoming / Outgoing tabs. The active tab is remembered per storage id.

mod farmers;
mod incoming;
mod outgoing;
mod overview;

use dioxus::prelude::*;

use crate::components::{nav, NotFoundCard, TopBar};
use crate::core::handoff;
use crate::core::storage::{self as persist, DetailTab};

use farmers::FarmersTab;
use incoming::IncomingOrdersTab;
use outgoing::OutgoingOrdersTab;
use overview::OverviewTab;

#[component]
pub fn ColdStorageDetailView(id: String) -> Element {
    let store = use_hook({
        let id = id.clone();
        move || handoff::cold_storage_for(&id)
    });
    let mut active_tab = use_signal({
        let id = id.clone();
        move || persist::load_active_tab(&id)
    });

    let Some(store) = store else {
        return rsx! {
            TopBar { title: "Cold Storage Details" }
            NotFoundCard {
                title: "Cold storage not found",
                detail: "This page has to be opened from the cold storage list.",
                back_label: "Back to Cold Storages",
                on_back: move |_| nav::go_cold_storages(),
            }
        };
    };

    let details = &store.cold_storage_details;
    let occupancy = store.occupancy;
    let current = active_tab();

    let tab_content = match current {
        DetailTab::Overview => rsx! {
            OverviewTab { store: store.clone() }
        },
        DetailTab::Farmers => rsx! {
            FarmersTab { store: store.clone() }
        },
        DetailTab::Incoming => rsx! {
            IncomingOrdersTab { store: store.clone() }
        },
        DetailTab::Outgoing => rsx! {
            OutgoingOrdersTab { store: store.clone() }
        },
    };

    rsx! {
        TopBar { title: "Cold Storage Details" }
        main { class: "screen",
            button {
                r#type: "button",
                class: "link-button",
                onclick: move |_| nav::go_cold_storages(),
                "← Back to Cold Storages"
            }

            div { class: "card-grid card-grid--three",
                div { class: "info-card",
                    span { class: "info-card__label", "Storage Details" }
                    strong { class: "info-card__value", "{details.cold_storage_name}" }
                    span { class: "info-card__meta", "{details.cold_storage_address}" }
                }
                div { class: "info-card",
                    span { class: "info-card__label", "Owner" }
                    strong { class: "info-card__value", "{store.name}" }
                    span { class: "info-card__meta", "{store.mobile_number}" }
                }
                div { class: "info-card",
                    span { class: "info-card__label", "Capacity" }
                    strong { class: "info-card__value", "{details.capacity}" }
                    if let Some(occupancy) = occupancy {
                        span {
                            class: if occupancy < 50.0 { "badge badge--outline" } else { "badge badge--green" },
                            "{occupancy:.0}% Occupied"
                        }
                    }
                }
            }

            div { class: "panel",
                div { class: "tabs",
                    for tab in DetailTab::ALL {
                        {
                            let id = id.clone();
                            rsx! {
                                button {
                                    r#type: "button",
                                    class: if tab == current { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" },
                                    onclick: move |_| {
                                        active_tab.set(tab);
                                        persist::save_active_tab(&id, tab);
                                    },
                                    "{tab.label()}"
                                }
                            }
                        }
                    }
                }
                div { class: "tabs__content", {tab_content} }
            }
        }
    }
}
