//! One-shot entity snapshots handed from list screens to detail screens.
//!
//! List rows already hold the full entity, so a row click stashes the record
//! here and the detail route picks it up on mount instead of re-fetching by
//! id. Order and farmer slots are consumed on take; the cold-storage slot is
//! checked against the route id and left in place so detail screens can
//! navigate back to the storage without a re-stash. A detail screen opened
//! without its snapshot (deep link, reload) renders a not-found placeholder.

use api::{Farmer, IncomingOrder, OutgoingOrder, StoreAdmin};
use dioxus::prelude::*;

pub static COLD_STORAGE: GlobalSignal<Option<StoreAdmin>> = Signal::global(|| None);
pub static INCOMING_ORDER: GlobalSignal<Option<IncomingOrder>> = Signal::global(|| None);
pub static OUTGOING_ORDER: GlobalSignal<Option<OutgoingOrder>> = Signal::global(|| None);
pub static FARMER: GlobalSignal<Option<Farmer>> = Signal::global(|| None);

pub fn stash_cold_storage(store: StoreAdmin) {
    *COLD_STORAGE.write() = Some(store);
}

/// Snapshot for the given storage id, if that is what was stashed.
pub fn cold_storage_for(id: &str) -> Option<StoreAdmin> {
    COLD_STORAGE
        .read()
        .as_ref()
        .filter(|store| store.id == id)
        .cloned()
}

pub fn stash_incoming_order(order: IncomingOrder) {
    *INCOMING_ORDER.write() = Some(order);
}

pub fn take_incoming_order() -> Option<IncomingOrder> {
    INCOMING_ORDER.write().take()
}

pub fn stash_outgoing_order(order: OutgoingOrder) {
    *OUTGOING_ORDER.write() = Some(order);
}

pub fn take_outgoing_order() -> Option<OutgoingOrder> {
    OUTGOING_ORDER.write().take()
}

pub fn stash_farmer(farmer: Farmer) {
    *FARMER.write() = Some(farmer);
}

pub fn take_farmer() -> Option<Farmer> {
    FARMER.write().take()
}
