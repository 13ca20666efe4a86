use dioxus::prelude::*;

use ui::components::nav::{register_nav, NavActions};
use ui::components::Sidebar;
use ui::views::{
    ColdStorageDetailView, ColdStoragesView, DashboardView, FarmerDetailView, IncomingReceiptView,
    LoginView, OutgoingReceiptView,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppShell)]
    #[route("/")]
    Dashboard {},
    #[route("/cold-storages")]
    ColdStorages {},
    #[route("/cold-storages/:id")]
    ColdStorageDetail { id: String },
    #[route("/cold-storages/:id/incoming-orders/:order_id")]
    IncomingReceipt { id: String, order_id: String },
    #[route("/cold-storages/:id/outgoing-orders/:order_id")]
    OutgoingReceipt { id: String, order_id: String },
    #[route("/cold-storages/:id/farmers/:farmer_id")]
    FarmerDetail { id: String, farmer_id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_to_login() {
    navigator().push(Route::Login {});
}
fn nav_to_dashboard() {
    navigator().push(Route::Dashboard {});
}
fn nav_to_cold_storages() {
    navigator().push(Route::ColdStorages {});
}
fn nav_to_cold_storage(id: &str) {
    navigator().push(Route::ColdStorageDetail { id: id.to_string() });
}
fn nav_to_incoming_receipt(id: &str, order_id: &str) {
    navigator().push(Route::IncomingReceipt {
        id: id.to_string(),
        order_id: order_id.to_string(),
    });
}
fn nav_to_outgoing_receipt(id: &str, order_id: &str) {
    navigator().push(Route::OutgoingReceipt {
        id: id.to_string(),
        order_id: order_id.to_string(),
    });
}
fn nav_to_farmer(id: &str, farmer_id: &str) {
    navigator().push(Route::FarmerDetail {
        id: id.to_string(),
        farmer_id: farmer_id.to_string(),
    });
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Register routing callbacks so the shared ui crate can navigate
    // without knowing this crate's Route enum.
    register_nav(NavActions {
        to_login: nav_to_login,
        to_dashboard: nav_to_dashboard,
        to_cold_storages: nav_to_cold_storages,
        to_cold_storage: nav_to_cold_storage,
        to_incoming_receipt: nav_to_incoming_receipt,
        to_outgoing_receipt: nav_to_outgoing_receipt,
        to_farmer: nav_to_farmer,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Sidebar chrome around every screen except the login form.
#[component]
fn AppShell() -> Element {
    rsx! {
        div { class: "app-shell",
            Sidebar {}
            div { class: "app-shell__content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginView {}
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! {
        DashboardView {}
    }
}

#[component]
fn ColdStorages() -> Element {
    rsx! {
        ColdStoragesView {}
    }
}

#[component]
fn ColdStorageDetail(id: String) -> Element {
    rsx! {
        ColdStorageDetailView { id }
    }
}

#[component]
fn IncomingReceipt(id: String, order_id: String) -> Element {
    rsx! {
        IncomingReceiptView { storage_id: id, order_id }
    }
}

#[component]
fn OutgoingReceipt(id: String, order_id: String) -> Element {
    rsx! {
        OutgoingReceiptView { storage_id: id, order_id }
    }
}

#[component]
fn FarmerDetail(id: String, farmer_id: String) -> Element {
    rsx! {
        FarmerDetailView { storage_id: id, farmer_id }
    }
}
