//! Loading, error, and empty placeholders shared across screens.

use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "loading", div { class: "spinner" } }
    }
}

/// Inline error banner rendered in place of a screen's content.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        p { class: "empty-state", "{message}" }
    }
}

/// Shown when a detail route was opened without its navigation snapshot.
#[component]
pub fn NotFoundCard(
    title: String,
    detail: String,
    back_label: String,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "not-found",
            div { class: "not-found__card",
                h2 { class: "not-found__title", "{title}" }
                p { class: "not-found__detail", "{detail}" }
                button {
                    r#type: "button",
                    class: "link-button",
                    onclick: move |_| on_back.call(()),
                    "← {back_label}"
                }
            }
        }
    }
}
