//! Farmer detail: profile, edit/delete, this farmer's orders in the current
//! storage, and the order-frequency panel.

use api::{Farmer, FarmerUpdate};
use dioxus::prelude::*;

use crate::analytics;
use crate::components::charts::TrendLine;
use crate::components::{nav, EmptyState, ErrorBanner, Modal, NotFoundCard, Spinner, TopBar};
use crate::core::{fetch, format, handoff, session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrequencyPeriod {
    Monthly,
    Quarterly,
}

#[component]
pub fn FarmerDetailView(storage_id: String, farmer_id: String) -> Element {
    let initial = use_hook(handoff::take_farmer);
    let mut farmer = use_signal({
        let farmer_id = farmer_id.clone();
        move || initial.filter(|farmer| farmer.id == farmer_id)
    });
    let mut draft = use_signal(|| Option::<Farmer>::None);
    let mut confirm_delete = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut period = use_signal(|| FrequencyPeriod::Monthly);

    let orders = fetch::use_api_resource({
        let storage_id = storage_id.clone();
        let farmer_id = farmer_id.clone();
        move |client| {
            let storage_id = storage_id.clone();
            let farmer_id = farmer_id.clone();
            async move { client.farmer_orders(&storage_id, &farmer_id).await }
        }
    });
    let frequency = fetch::use_api_resource({
        let storage_id = storage_id.clone();
        let farmer_id = farmer_id.clone();
        move |client| {
            let storage_id = storage_id.clone();
            let farmer_id = farmer_id.clone();
            async move { client.order_frequency(&storage_id, &farmer_id).await }
        }
    });

    let back_storage_id = storage_id.clone();
    let Some(current) = farmer() else {
        return rsx! {
            TopBar { title: "Farmer Details" }
            NotFoundCard {
                title: "Farmer not found",
                detail: "This page has to be opened from the farmers list.",
                back_label: "Back to Cold Storage",
                on_back: move |_| nav::go_cold_storage(&back_storage_id),
            }
        };
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(edited) = draft.peek().clone() else {
            return;
        };
        submitting.set(true);
        action_error.set(None);
        spawn(async move {
            let update = FarmerUpdate {
                name: edited.name.clone(),
                address: edited.address.clone(),
                mobile_number: edited.mobile_number.clone(),
                is_verified: edited.is_verified,
            };
            match session::client().update_farmer(&edited.id, &update).await {
                Ok(updated) => {
                    farmer.set(Some(updated));
                    draft.set(None);
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let delete_farmer = {
        let farmer_record_id = current.id.clone();
        let storage_id = storage_id.clone();
        move |_| {
            if *deleting.peek() {
                return;
            }
            deleting.set(true);
            action_error.set(None);
            let farmer_record_id = farmer_record_id.clone();
            let storage_id = storage_id.clone();
            spawn(async move {
                match session::client().delete_farmer(&farmer_record_id).await {
                    Ok(()) => {
                        confirm_delete.set(false);
                        nav::go_cold_storage(&storage_id);
                    }
                    Err(err) => {
                        action_error.set(Some(err.to_string()));
                        confirm_delete.set(false);
                    }
                }
                deleting.set(false);
            });
        }
    };

    let open_edit = {
        let current = current.clone();
        move |_| {
            action_error.set(None);
            draft.set(Some(current.clone()));
        }
    };

    let registered = format::format_timestamp(&current.created_at);
    let back_id = storage_id.clone();

    let orders_section = match &*orders.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: "Failed to load this farmer's orders: {err}" }
        },
        Some(Ok(orders)) if orders.is_empty() => rsx! {
            EmptyState { message: "No orders recorded for this farmer in this cold storage." }
        },
        Some(Ok(orders)) => rsx! {
            div { class: "order-list",
                for order in orders.clone().into_iter() {
                    details { class: "order-list__item",
                        summary { class: "order-list__summary",
                            span { class: "cell-strong",
                                "{order.voucher.kind} #{order.voucher.voucher_number}"
                            }
                            span { class: "cell-muted", "{order.date_of_submission}" }
                            span { "{order.varieties()}" }
                            span { class: "badge badge--outline",
                                "{order.total_current()} of {order.total_initial()} bags in store"
                            }
                        }
                        div { class: "order-list__detail",
                            for detail in order.order_details.clone().into_iter() {
                                div { class: "order-list__lot",
                                    span { class: "cell-muted", "Location: {detail.location}" }
                                    div { class: "badge-stack",
                                        for bag in detail.bag_sizes.into_iter() {
                                            span { class: "badge badge--outline",
                                                "{bag.size}: {bag.quantity.current_quantity}/{bag.quantity.initial_quantity}"
                                            }
                                        }
                                    }
                                }
                            }
                            if !order.remarks.is_empty() {
                                p { class: "cell-muted", "Remarks: {order.remarks}" }
                            }
                        }
                    }
                }
            }
        },
    };

    let frequency_section = match &*frequency.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(err)) => rsx! {
            ErrorBanner { message: "Failed to load order-frequency data: {err}" }
        },
        Some(Ok(frequency)) => {
            let buckets = match period() {
                FrequencyPeriod::Monthly => &frequency.monthly_frequency,
                FrequencyPeriod::Quarterly => &frequency.quarterly_frequency,
            };
            let points = analytics::frequency_points(buckets);

            rsx! {
                div { class: "frequency",
                    div { class: "frequency__stats",
                        div { class: "insight-box",
                            h3 { class: "insight-box__title", "Orders" }
                            p { class: "insight-box__figure", "{frequency.order_count}" }
                        }
                        div { class: "insight-box",
                            h3 { class: "insight-box__title", "Avg. Interval" }
                            p { class: "insight-box__figure", "{frequency.avg_order_interval:.1} days" }
                        }
                        div { class: "frequency__toggle",
                            button {
                                r#type: "button",
                                class: if period() == FrequencyPeriod::Monthly { "button button--primary" } else { "button" },
                                onclick: move |_| period.set(FrequencyPeriod::Monthly),
                                "Monthly"
                            }
                            button {
                                r#type: "button",
                                class: if period() == FrequencyPeriod::Quarterly { "button button--primary" } else { "button" },
                                onclick: move |_| period.set(FrequencyPeriod::Quarterly),
                                "Quarterly"
                            }
                        }
                    }
                    if points.is_empty() {
                        EmptyState { message: "Not enough orders to chart a trend yet." }
                    } else {
                        TrendLine { points }
                    }
                }
            }
        }
    };

    rsx! {
        TopBar { title: "Farmer Details" }
        main { class: "screen",
            div { class: "screen__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| nav::go_cold_storage(&back_id),
                    "← Back to Cold Storage"
                }
                button {
                    r#type: "button",
                    class: "button button--amber",
                    onclick: open_edit,
                    "Edit Farmer"
                }
                button {
                    r#type: "button",
                    class: "button button--danger",
                    onclick: move |_| confirm_delete.set(true),
                    "Delete Farmer"
                }
            }

            if let Some(message) = action_error() {
                if draft.read().is_none() {
                    ErrorBanner { message: "{message}" }
                }
            }

            div { class: "card-grid card-grid--three",
                div { class: "info-card",
                    span { class: "info-card__label", "Farmer" }
                    strong { class: "info-card__value", "{current.name}" }
                    span { class: "info-card__meta", "ID: {current.farmer_id}" }
                    span {
                        class: if current.is_verified { "badge badge--green" } else { "badge badge--outline" },
                        if current.is_verified { "Verified" } else { "Unverified" }
                    }
                }
                div { class: "info-card",
                    span { class: "info-card__label", "Contact" }
                    strong { class: "info-card__value", "{current.mobile_number}" }
                    span { class: "info-card__meta", "{current.address}" }
                }
                div { class: "info-card",
                    span { class: "info-card__label", "Registered" }
                    strong { class: "info-card__value", "{registered}" }
                }
            }

            div { class: "panel",
                div { class: "panel__header",
                    h2 { "Orders in this Cold Storage" }
                }
                {orders_section}
            }

            div { class: "panel",
                div { class: "panel__header",
                    h2 { "Order Frequency" }
                }
                {frequency_section}
            }

            if draft.read().is_some() {
                {render_edit_modal(draft, submitting, action_error, submit)}
            }

            if confirm_delete() {
                Modal {
                    title: "Confirm Deletion",
                    on_close: move |_| confirm_delete.set(false),
                    p { class: "modal__text",
                        "Are you sure you want to delete this farmer? Their order history stays on the backend, but the registration is removed. This action cannot be undone."
                    }
                    p { class: "modal__text cell-muted", "{current.name} · ID {current.farmer_id}" }
                    div { class: "form__actions",
                        button {
                            r#type: "button",
                            class: "button",
                            disabled: deleting(),
                            onclick: move |_| confirm_delete.set(false),
                            "Cancel"
                        }
                        button {
                            r#type: "button",
                            class: "button button--danger",
                            disabled: deleting(),
                            onclick: delete_farmer,
                            if deleting() { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

fn render_edit_modal(
    mut draft: Signal<Option<Farmer>>,
    submitting: Signal<bool>,
    action_error: Signal<Option<String>>,
    submit: impl FnMut(FormEvent) + 'static,
) -> Element {
    let Some(edited) = draft.read().clone() else {
        return rsx! {};
    };

    rsx! {
        Modal {
            title: "Edit Farmer",
            on_close: move |_| draft.set(None),
            form { class: "form", onsubmit: submit,
                label { class: "field",
                    span { class: "field__label", "Name" }
                    input {
                        class: "field__input",
                        r#type: "text",
                        required: true,
                        value: "{edited.name}",
                        oninput: move |evt| draft.with_mut(|draft| {
                            if let Some(draft) = draft {
                                draft.name = evt.value();
                            }
                        }),
                    }
                }
                label { class: "field",
                    span { class: "field__label", "Address" }
                    input {
                        class: "field__input",
                        r#type: "text",
                        value: "{edited.address}",
                        oninput: move |evt| draft.with_mut(|draft| {
                            if let Some(draft) = draft {
                                draft.address = evt.value();
                            }
                        }),
                    }
                }
                label { class: "field",
                    span { class: "field__label", "Mobile Number" }
                    input {
                        class: "field__input",
                        r#type: "text",
                        value: "{edited.mobile_number}",
                        oninput: move |evt| draft.with_mut(|draft| {
                            if let Some(draft) = draft {
                                draft.mobile_number = evt.value();
                            }
                        }),
                    }
                }
                label { class: "field field--inline",
                    input {
                        r#type: "checkbox",
                        checked: edited.is_verified,
                        onchange: move |evt| draft.with_mut(|draft| {
                            if let Some(draft) = draft {
                                draft.is_verified = evt.checked();
                            }
                        }),
                    }
                    span { class: "field__label", "Verified" }
                }

                if let Some(message) = action_error() {
                    ErrorBanner { message: "{message}" }
                }

                div { class: "form__actions",
                    button {
                        r#type: "button",
                        class: "button",
                        disabled: submitting(),
                        onclick: move |_| draft.set(None),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
