use dioxus::prelude::*;

/// Compact metric tile used on the dashboard and the overview tab. The
/// description and subtext lines render only when non-empty.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] description: String,
    #[props(default)] subtext: String,
) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-card__label", "{label}" }
            strong { class: "stat-card__value", "{value}" }
            if !description.is_empty() {
                span { class: "stat-card__description", "{description}" }
            }
            if !subtext.is_empty() {
                span { class: "stat-card__subtext", "{subtext}" }
            }
        }
    }
}
