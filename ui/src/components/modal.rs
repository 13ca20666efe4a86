use dioxus::prelude::*;

/// Overlay dialog. Clicking the backdrop or the close button fires
/// `on_close`; the panel itself swallows clicks.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal__backdrop", onclick: move |_| on_close.call(()),
            div { class: "modal__panel", onclick: move |evt| evt.stop_propagation(),
                div { class: "modal__header",
                    h2 { class: "modal__title", "{title}" }
                    button {
                        r#type: "button",
                        class: "modal__close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                div { class: "modal__body", {children} }
            }
        }
    }
}
