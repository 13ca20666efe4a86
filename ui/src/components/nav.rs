//! Navigation actions registered by the platform crate.
//!
//! The route enum lives in the web crate, so `ui` cannot push routes
//! directly. The platform registers a [`NavActions`] table at startup and
//! screens call the wrappers below; an unregistered action is a no-op.

use once_cell::sync::OnceCell;

pub struct NavActions {
    pub to_login: fn(),
    pub to_dashboard: fn(),
    pub to_cold_storages: fn(),
    /// Cold-storage detail by storage id.
    pub to_cold_storage: fn(&str),
    /// Incoming receipt by (storage id, order id).
    pub to_incoming_receipt: fn(&str, &str),
    /// Outgoing receipt by (storage id, order id).
    pub to_outgoing_receipt: fn(&str, &str),
    /// Farmer detail by (storage id, farmer id).
    pub to_farmer: fn(&str, &str),
}

static NAV: OnceCell<NavActions> = OnceCell::new();

pub fn register_nav(actions: NavActions) {
    let _ = NAV.set(actions);
}

pub fn go_login() {
    if let Some(nav) = NAV.get() {
        (nav.to_login)();
    }
}

pub fn go_dashboard() {
    if let Some(nav) = NAV.get() {
        (nav.to_dashboard)();
    }
}

pub fn go_cold_storages() {
    if let Some(nav) = NAV.get() {
        (nav.to_cold_storages)();
    }
}

pub fn go_cold_storage(storage_id: &str) {
    if let Some(nav) = NAV.get() {
        (nav.to_cold_storage)(storage_id);
    }
}

pub fn go_incoming_receipt(storage_id: &str, order_id: &str) {
    if let Some(nav) = NAV.get() {
        (nav.to_incoming_receipt)(storage_id, order_id);
    }
}

pub fn go_outgoing_receipt(storage_id: &str, order_id: &str) {
    if let Some(nav) = NAV.get() {
        (nav.to_outgoing_receipt)(storage_id, order_id);
    }
}

pub fn go_farmer(storage_id: &str, farmer_id: &str) {
    if let Some(nav) = NAV.get() {
        (nav.to_farmer)(storage_id, farmer_id);
    }
}
