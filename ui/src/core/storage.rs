//! Local persistence for per-screen UI state.
//!
//! The active detail tab is remembered per cold-storage id so a reload lands
//! the admin back on the tab they were working in. Backed by browser
//! localStorage on wasm; native builds (and tests) use a process-local map.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Farmers,
    Incoming,
    Outgoing,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Farmers,
        DetailTab::Incoming,
        DetailTab::Outgoing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Farmers => "farmers",
            DetailTab::Incoming => "incoming",
            DetailTab::Outgoing => "outgoing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Farmers => "Farmers",
            DetailTab::Incoming => "Incoming Orders",
            DetailTab::Outgoing => "Outgoing Orders",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == raw)
    }
}

fn tab_key(storage_id: &str) -> String {
    format!("cold-storage:{storage_id}:active-tab")
}

pub fn load_active_tab(storage_id: &str) -> DetailTab {
    read_key(&tab_key(storage_id))
        .as_deref()
        .and_then(DetailTab::parse)
        .unwrap_or_default()
}

pub fn save_active_tab(storage_id: &str, tab: DetailTab) {
    write_key(&tab_key(storage_id), tab.as_str());
}

#[cfg(target_arch = "wasm32")]
fn read_key(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

#[cfg(target_arch = "wasm32")]
fn write_key(key: &str, value: &str) {
    if let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = store.set_item(key, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    static STORE: Lazy<Mutex<HashMap<String, String>>> = Lazy::new(|| Mutex::new(HashMap::new()));

    pub fn read_key(key: &str) -> Option<String> {
        STORE.lock().ok()?.get(key).cloned()
    }

    pub fn write_key(key: &str, value: &str) {
        if let Ok(mut store) = STORE.lock() {
            store.insert(key.to_string(), value.to_string());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
use native::{read_key, write_key};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_overview_when_nothing_saved() {
        assert_eq!(load_active_tab("unsaved-storage"), DetailTab::Overview);
    }

    #[test]
    fn remembers_the_tab_per_storage_id() {
        save_active_tab("storage-a", DetailTab::Incoming);
        save_active_tab("storage-b", DetailTab::Farmers);
        assert_eq!(load_active_tab("storage-a"), DetailTab::Incoming);
        assert_eq!(load_active_tab("storage-b"), DetailTab::Farmers);
    }

    #[test]
    fn garbage_values_fall_back_to_the_default() {
        write_key(&tab_key("storage-c"), "not-a-tab");
        assert_eq!(load_active_tab("storage-c"), DetailTab::Overview);
    }
}
