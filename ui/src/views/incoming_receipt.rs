//! Incoming receipt detail: voucher header, farmer and order info, the
//! per-bag inventory breakdown, and the edit dialog. The entity arrives via
//! the navigation handoff; edits round-trip through the backend and the
//! screen reflects whatever the backend returns.

use api::{IncomingOrder, IncomingOrderUpdate};
use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner, Modal, NotFoundCard, TopBar};
use crate::core::{fetch, format, handoff, session};

#[component]
pub fn IncomingReceiptView(storage_id: String, order_id: String) -> Element {
    let initial = use_hook(handoff::take_incoming_order);
    let mut receipt = use_signal({
        let order_id = order_id.clone();
        move || initial.filter(|order| order.id == order_id)
    });
    let mut draft = use_signal(|| Option::<IncomingOrder>::None);
    let mut submitting = use_signal(|| false);
    let mut edit_error = use_signal(|| Option::<String>::None);

    let farmer_id = receipt.read().as_ref().map(|order| order.farmer_id.clone());
    let farmer = fetch::use_api_resource(move |client| {
        let farmer_id = farmer_id.clone();
        async move {
            match farmer_id {
                Some(id) if !id.is_empty() => client.farmer(&id).await.map(Some),
                _ => Ok(None),
            }
        }
    });

    let back_storage_id = storage_id.clone();
    let Some(order) = receipt() else {
        return rsx! {
            TopBar { title: "Incoming Receipt Details" }
            NotFoundCard {
                title: "Receipt Not Found",
                detail: "The receipt you're looking for doesn't exist or has been removed.",
                back_label: "Back to Cold Storage",
                on_back: move |_| nav::go_cold_storage(&back_storage_id),
            }
        };
    };

    let farmer_view = farmer.read_unchecked();
    let (farmer_name, farmer_contact) = match &*farmer_view {
        Some(Ok(Some(farmer))) => (farmer.name.clone(), farmer.mobile_number.clone()),
        _ => ("—".to_string(), "Not provided".to_string()),
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(edited) = draft.peek().clone() else {
            return;
        };
        submitting.set(true);
        edit_error.set(None);
        spawn(async move {
            let update = IncomingOrderUpdate {
                remarks: edited.remarks.clone(),
                fulfilled: edited.fulfilled,
                date_of_submission: edited.date_of_submission.clone(),
                // the voucher carries a single lot, so only the first entry is sent
                order_details: edited.order_details.iter().take(1).cloned().collect(),
            };
            match session::client()
                .update_incoming_order(&edited.id, &update)
                .await
            {
                Ok(updated) => {
                    receipt.set(Some(updated));
                    draft.set(None);
                }
                Err(err) => edit_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let mark_fulfilled = {
        let order = order.clone();
        move |_| {
            if *submitting.peek() {
                return;
            }
            submitting.set(true);
            let order = order.clone();
            spawn(async move {
                let update = IncomingOrderUpdate {
                    remarks: order.remarks.clone(),
                    fulfilled: true,
                    date_of_submission: order.date_of_submission.clone(),
                    order_details: order.order_details.iter().take(1).cloned().collect(),
                };
                match session::client().update_incoming_order(&order.id, &update).await {
                    Ok(updated) => receipt.set(Some(updated)),
                    Err(err) => edit_error.set(Some(err.to_string())),
                }
                submitting.set(false);
            });
        }
    };

    let main_variety = order
        .order_details
        .first()
        .map(|detail| detail.variety.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let location = order
        .order_details
        .first()
        .map(|detail| detail.location.clone())
        .filter(|location| !location.is_empty())
        .unwrap_or_else(|| "Not specified".to_string());
    let submission_date = format::format_voucher_date(&order.date_of_submission);

    let bag_rows: Vec<(String, u32, u32, u32)> = order
        .order_details
        .iter()
        .flat_map(|detail| &detail.bag_sizes)
        .map(|bag| {
            (
                bag.size.clone(),
                bag.quantity.initial_quantity,
                bag.quantity.current_quantity,
                bag.quantity.removed(),
            )
        })
        .collect();

    let open_edit = {
        let order = order.clone();
        move |_| {
            edit_error.set(None);
            draft.set(Some(order.clone()));
        }
    };

    let back_id = storage_id.clone();

    rsx! {
        TopBar { title: "Incoming Receipt Details" }
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
                    "Edit Receipt"
                }
            }

            if let Some(message) = edit_error() {
                if draft.read().is_none() {
                    ErrorBanner { message: "{message}" }
                }
            }

            div { class: "panel receipt",
                div { class: "receipt__header receipt__header--incoming",
                    div {
                        h2 { class: "receipt__title", "Receipt #{order.voucher.voucher_number}" }
                        span { class: "receipt__date", "{submission_date}" }
                    }
                    span {
                        class: if order.fulfilled { "badge badge--green" } else { "badge badge--amber" },
                        if order.fulfilled { "Fulfilled" } else { "Pending" }
                    }
                }

                div { class: "receipt__body",
                    div { class: "card-grid card-grid--two",
                        div { class: "info-card",
                            span { class: "info-card__label", "Farmer Information" }
                            strong { class: "info-card__value", "{farmer_name}" }
                            span { class: "info-card__meta", "Farmer ID: {order.farmer_id}" }
                            span { class: "info-card__meta", "Contact: {farmer_contact}" }
                        }
                        div { class: "info-card",
                            span { class: "info-card__label", "Order Details" }
                            strong { class: "info-card__value", "{main_variety}" }
                            span { class: "info-card__meta", "Storage location: {location}" }
                        }
                    }

                    div { class: "receipt__table",
                        h3 { "Inventory Details" }
                        table { class: "plain-table",
                            thead {
                                tr {
                                    th { "Bag Size" }
                                    th { "Initial Quantity" }
                                    th { "Current Quantity" }
                                    th { "Removed" }
                                }
                            }
                            tbody {
                                for (size, initial, current, removed) in bag_rows.into_iter() {
                                    tr {
                                        td { class: "cell-strong", "{size}" }
                                        td { "{initial}" }
                                        td { "{current}" }
                                        td { "{removed}" }
                                    }
                                }
                                tr { class: "plain-table__totals",
                                    td { "Total" }
                                    td { "{order.total_initial()}" }
                                    td { "{order.total_current()}" }
                                    td { "{order.total_removed()}" }
                                }
                            }
                        }
                    }

                    if !order.remarks.is_empty() {
                        div { class: "receipt__remarks",
                            h3 { "Remarks" }
                            p { "{order.remarks}" }
                        }
                    }

                    if !order.fulfilled {
                        div { class: "screen__actions screen__actions--end",
                            button {
                                r#type: "button",
                                class: "button button--primary",
                                disabled: submitting(),
                                onclick: mark_fulfilled,
                                "Mark as Fulfilled"
                            }
                        }
                    }
                }
            }

            if draft.read().is_some() {
                {render_edit_modal(order.voucher.voucher_number, draft, submitting, edit_error, submit)}
            }
        }
    }
}

fn render_edit_modal(
    voucher_number: u32,
    mut draft: Signal<Option<IncomingOrder>>,
    submitting: Signal<bool>,
    edit_error: Signal<Option<String>>,
    submit: impl FnMut(FormEvent) + 'static,
) -> Element {
    let Some(edited) = draft.read().clone() else {
        return rsx! {};
    };

    let variety = edited
        .order_details
        .first()
        .map(|detail| detail.variety.clone())
        .unwrap_or_default();
    let location = edited
        .order_details
        .first()
        .map(|detail| detail.location.clone())
        .unwrap_or_default();
    let bags = edited
        .order_details
        .first()
        .map(|detail| detail.bag_sizes.clone())
        .unwrap_or_default();

    rsx! {
        Modal {
            title: "Edit Receipt #{voucher_number}",
            on_close: move |_| draft.set(None),
            form { class: "form", onsubmit: submit,
                div { class: "form__section",
                    label { class: "field",
                        span { class: "field__label", "Date of Submission (DD.MM.YY)" }
                        input {
                            class: "field__input",
                            r#type: "text",
                            value: "{edited.date_of_submission}",
                            oninput: move |evt| draft.with_mut(|draft| {
                                if let Some(draft) = draft {
                                    draft.date_of_submission = evt.value();
                                }
                            }),
                        }
                    }
                    label { class: "field field--inline",
                        input {
                            r#type: "checkbox",
                            checked: edited.fulfilled,
                            onchange: move |evt| draft.with_mut(|draft| {
                                if let Some(draft) = draft {
                                    draft.fulfilled = evt.checked();
                                }
                            }),
                        }
                        span { class: "field__label", "Fulfilled" }
                    }
                    label { class: "field",
                        span { class: "field__label", "Remarks" }
                        textarea {
                            class: "field__input",
                            rows: "3",
                            value: "{edited.remarks}",
                            oninput: move |evt| draft.with_mut(|draft| {
                                if let Some(draft) = draft {
                                    draft.remarks = evt.value();
                                }
                            }),
                        }
                    }
                }

                div { class: "form__section",
                    h3 { "Order Details" }
                    div { class: "form__row",
                        label { class: "field",
                            span { class: "field__label", "Variety" }
                            input {
                                class: "field__input",
                                r#type: "text",
                                required: true,
                                value: "{variety}",
                                oninput: move |evt| draft.with_mut(|draft| {
                                    if let Some(draft) = draft {
                                        // one lot per voucher; keep every entry in step
                                        for detail in &mut draft.order_details {
                                            detail.variety = evt.value();
                                        }
                                    }
                                }),
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", "Storage Location" }
                            input {
                                class: "field__input",
                                r#type: "text",
                                required: true,
                                value: "{location}",
                                oninput: move |evt| draft.with_mut(|draft| {
                                    if let Some(draft) = draft {
                                        for detail in &mut draft.order_details {
                                            detail.location = evt.value();
                                        }
                                    }
                                }),
                            }
                        }
                    }

                    h4 { "Bag Sizes" }
                    for (index, bag) in bags.into_iter().enumerate() {
                        div { class: "form__row form__row--bags",
                            label { class: "field",
                                span { class: "field__label", "Size" }
                                input {
                                    class: "field__input",
                                    r#type: "text",
                                    value: "{bag.size}",
                                    oninput: move |evt| draft.with_mut(|draft| {
                                        if let Some(bag) = draft.as_mut().and_then(|d| {
                                            d.order_details.get_mut(0)?.bag_sizes.get_mut(index)
                                        }) {
                                            bag.size = evt.value();
                                        }
                                    }),
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", "Initial Quantity" }
                                input {
                                    class: "field__input",
                                    r#type: "number",
                                    min: "0",
                                    value: "{bag.quantity.initial_quantity}",
                                    oninput: move |evt| draft.with_mut(|draft| {
                                        if let Some(bag) = draft.as_mut().and_then(|d| {
                                            d.order_details.get_mut(0)?.bag_sizes.get_mut(index)
                                        }) {
                                            bag.quantity.initial_quantity =
                                                evt.value().parse().unwrap_or(0);
                                        }
                                    }),
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", "Current Quantity" }
                                input {
                                    class: "field__input",
                                    r#type: "number",
                                    min: "0",
                                    value: "{bag.quantity.current_quantity}",
                                    oninput: move |evt| draft.with_mut(|draft| {
                                        if let Some(bag) = draft.as_mut().and_then(|d| {
                                            d.order_details.get_mut(0)?.bag_sizes.get_mut(index)
                                        }) {
                                            bag.quantity.current_quantity =
                                                evt.value().parse().unwrap_or(0);
                                        }
                                    }),
                                }
                            }
                        }
                    }
                }

                if let Some(message) = edit_error() {
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
