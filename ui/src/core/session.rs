//! The logged-in admin's session. Held in a global signal so any screen can
//! build an authenticated API client without threading the token around.

use api::Admin;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::core::config;

pub static SESSION: GlobalSignal<Option<Admin>> = Signal::global(|| None);

pub fn sign_in(admin: Admin) {
    info!(email = %admin.email, "admin signed in");
    *SESSION.write() = Some(admin);
}

pub fn sign_out() {
    info!("admin signed out");
    *SESSION.write() = None;
}

pub fn current() -> Option<Admin> {
    SESSION.read().clone()
}

/// Build an API client carrying the current session's bearer token, if any.
pub fn client() -> api::Client {
    let client = api::Client::new(config::api_base_url());
    match SESSION.read().as_ref() {
        Some(admin) => client.with_token(admin.token.clone()),
        None => client,
    }
}
