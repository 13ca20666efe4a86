//! Application chrome: the sidebar and the per-screen top bar.

use dioxus::prelude::*;

use crate::components::nav;
use crate::core::session;

#[component]
pub fn Sidebar() -> Element {
    let admin = session::current();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                span { class: "sidebar__brand-mark", "Coldstore" }
                span { class: "sidebar__brand-subtitle", "Warehouse admin" }
            }

            nav { class: "sidebar__nav",
                button {
                    r#type: "button",
                    class: "sidebar__link",
                    onclick: move |_| nav::go_dashboard(),
                    "Dashboard"
                }
                button {
                    r#type: "button",
                    class: "sidebar__link",
                    onclick: move |_| nav::go_cold_storages(),
                    "Cold Storages"
                }
            }

            div { class: "sidebar__footer",
                if let Some(admin) = admin {
                    span { class: "sidebar__account", "{admin.email}" }
                    button {
                        r#type: "button",
                        class: "sidebar__link sidebar__link--signout",
                        onclick: move |_| {
                            session::sign_out();
                            nav::go_login();
                        },
                        "Sign out"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "sidebar__link",
                        onclick: move |_| nav::go_login(),
                        "Log in"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TopBar(title: String) -> Element {
    rsx! {
        header { class: "topbar",
            h1 { class: "topbar__title", "{title}" }
        }
    }
}
