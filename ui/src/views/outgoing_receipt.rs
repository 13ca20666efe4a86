//! Outgoing receipt detail: delivery header, farmer info, the removal
//! breakdown against the referenced incoming lot, the edit dialog, and the
//! delete confirmation. Quantity-removed edits are validated against the
//! incoming order's available stock and over-removal blocks submission.

use api::{
    IncomingOrderId, OutgoingDetailUpdate, OutgoingOrder, OutgoingOrderUpdate,
};
use dioxus::prelude::*;

use crate::components::{nav, ErrorBanner, Modal, NotFoundCard, TopBar};
use crate::core::{fetch, format, handoff, session};

/// A removal that asks for more bags than the incoming lot still holds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExcessRemoval {
    pub variety: String,
    pub size: String,
    pub requested: u32,
    pub available: u32,
}

pub(crate) fn excess_removals(order: &OutgoingOrder) -> Vec<ExcessRemoval> {
    order
        .order_details
        .iter()
        .flat_map(|detail| {
            detail.bag_sizes.iter().filter_map(|bag| {
                let available = detail.incoming_order.available(&bag.size).unwrap_or(0);
                (bag.quantity_removed > available).then(|| ExcessRemoval {
                    variety: detail.variety.clone(),
                    size: bag.size.clone(),
                    requested: bag.quantity_removed,
                    available,
                })
            })
        })
        .collect()
}

fn build_update(order: &OutgoingOrder) -> OutgoingOrderUpdate {
    OutgoingOrderUpdate {
        remarks: order.remarks.clone(),
        date_of_extraction: order.date_of_extraction.clone(),
        order_details: order
            .order_details
            .iter()
            .map(|detail| OutgoingDetailUpdate {
                variety: detail.variety.clone(),
                incoming_order: IncomingOrderId {
                    id: detail.incoming_order.id.clone(),
                },
                bag_sizes: detail.bag_sizes.clone(),
            })
            .collect(),
    }
}

#[component]
pub fn OutgoingReceiptView(storage_id: String, order_id: String) -> Element {
    let initial = use_hook(handoff::take_outgoing_order);
    let mut receipt = use_signal({
        let order_id = order_id.clone();
        move || initial.filter(|order| order.id == order_id)
    });
    let mut draft = use_signal(|| Option::<OutgoingOrder>::None);
    let mut confirm_delete = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

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
            TopBar { title: "Outgoing Receipt Details" }
            NotFoundCard {
                title: "Receipt Not Found",
                detail: "The receipt you're looking for doesn't exist or has been removed.",
                back_label: "Back to Cold Storage",
                on_back: move |_| nav::go_cold_storage(&back_storage_id),
            }
        };
    };

    let farmer_view = farmer.read_unchecked();
    let (farmer_name, farmer_contact, farmer_address) = match &*farmer_view {
        Some(Ok(Some(farmer))) => (
            farmer.name.clone(),
            farmer.mobile_number.clone(),
            farmer.address.clone(),
        ),
        _ => (
            "—".to_string(),
            "Not provided".to_string(),
            "Not provided".to_string(),
        ),
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(edited) = draft.peek().clone() else {
            return;
        };
        if !excess_removals(&edited).is_empty() {
            return;
        }
        submitting.set(true);
        action_error.set(None);
        spawn(async move {
            let update = build_update(&edited);
            match session::client()
                .update_outgoing_order(&edited.id, &update)
                .await
            {
                Ok(updated) => {
                    receipt.set(Some(updated));
                    draft.set(None);
                }
                Err(err) => action_error.set(Some(err.to_string())),
            }
            submitting.set(false);
        });
    };

    let delete_order = {
        let order_id = order.id.clone();
        let storage_id = storage_id.clone();
        move |_| {
            if *deleting.peek() {
                return;
            }
            deleting.set(true);
            action_error.set(None);
            let order_id = order_id.clone();
            let storage_id = storage_id.clone();
            spawn(async move {
                match session::client().delete_outgoing_order(&order_id).await {
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

    let main_variety = order
        .order_details
        .first()
        .map(|detail| detail.variety.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let location = order
        .order_details
        .first()
        .map(|detail| detail.incoming_order.location.clone())
        .filter(|location| !location.is_empty())
        .unwrap_or_else(|| "Not specified".to_string());
    let extraction_date = format::format_voucher_date(&order.date_of_extraction);

    // one row per bag size: what was available on the lot and what left
    let bag_rows: Vec<(String, u32, u32)> = order
        .order_details
        .iter()
        .flat_map(|detail| {
            detail.bag_sizes.iter().map(|bag| {
                (
                    bag.size.clone(),
                    detail.incoming_order.available(&bag.size).unwrap_or(0),
                    bag.quantity_removed,
                )
            })
        })
        .collect();

    let open_edit = {
        let order = order.clone();
        move |_| {
            action_error.set(None);
            draft.set(Some(order.clone()));
        }
    };

    let back_id = storage_id.clone();
    let voucher_number = order.voucher.voucher_number;
    let source_voucher = order
        .order_details
        .first()
        .map(|detail| detail.incoming_order.voucher.voucher_number)
        .unwrap_or(0);

    rsx! {
        TopBar { title: "Outgoing Receipt Details" }
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
                button {
                    r#type: "button",
                    class: "button button--danger",
                    onclick: move |_| confirm_delete.set(true),
                    "Delete Receipt"
                }
            }

            if let Some(message) = action_error() {
                if draft.read().is_none() {
                    ErrorBanner { message: "{message}" }
                }
            }

            div { class: "panel receipt",
                div { class: "receipt__header receipt__header--outgoing",
                    div {
                        h2 { class: "receipt__title", "Delivery #{voucher_number}" }
                        span { class: "receipt__date", "{extraction_date}" }
                    }
                }

                div { class: "receipt__body",
                    div { class: "card-grid card-grid--two",
                        div { class: "info-card",
                            span { class: "info-card__label", "Farmer Information" }
                            strong { class: "info-card__value", "{farmer_name}" }
                            span { class: "info-card__meta", "Farmer ID: {order.farmer_id}" }
                            span { class: "info-card__meta", "Contact: {farmer_contact}" }
                            span { class: "info-card__meta", "Address: {farmer_address}" }
                        }
                        div { class: "info-card",
                            span { class: "info-card__label", "Delivery Details" }
                            strong { class: "info-card__value", "{main_variety}" }
                            span { class: "info-card__meta", "Storage location: {location}" }
                            span { class: "info-card__meta", "Drawn from receipt #{source_voucher}" }
                        }
                    }

                    div { class: "receipt__table",
                        h3 { "Inventory Removed" }
                        table { class: "plain-table",
                            thead {
                                tr {
                                    th { "Bag Size" }
                                    th { "Available" }
                                    th { "Removed" }
                                }
                            }
                            tbody {
                                for (size, available, removed) in bag_rows.into_iter() {
                                    tr {
                                        td { class: "cell-strong", "{size}" }
                                        td { "{available}" }
                                        td { "{removed}" }
                                    }
                                }
                                tr { class: "plain-table__totals",
                                    td { "Total" }
                                    td { "" }
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
                }
            }

            if draft.read().is_some() {
                {render_edit_modal(voucher_number, farmer_name.clone(), draft, submitting, action_error, submit)}
            }

            if confirm_delete() {
                Modal {
                    title: "Confirm Deletion",
                    on_close: move |_| confirm_delete.set(false),
                    p { class: "modal__text",
                        "Are you sure you want to delete this outgoing delivery receipt? This action cannot be undone."
                    }
                    p { class: "modal__text cell-muted", "Delivery #{voucher_number} for {farmer_name}" }
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
                            onclick: delete_order,
                            if deleting() { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            }
        }
    }
}

fn render_edit_modal(
    voucher_number: u32,
    farmer_name: String,
    mut draft: Signal<Option<OutgoingOrder>>,
    submitting: Signal<bool>,
    action_error: Signal<Option<String>>,
    submit: impl FnMut(FormEvent) + 'static,
) -> Element {
    let Some(edited) = draft.read().clone() else {
        return rsx! {};
    };

    let problems = excess_removals(&edited);
    let blocked = !problems.is_empty();

    let variety = edited
        .order_details
        .first()
        .map(|detail| detail.variety.clone())
        .unwrap_or_default();
    let location = edited
        .order_details
        .first()
        .map(|detail| detail.incoming_order.location.clone())
        .unwrap_or_default();

    // (detail index, bag index, size, available, removed, over-limit)
    let mut bag_rows: Vec<(usize, usize, String, u32, u32, bool)> = Vec::new();
    for (detail_index, detail) in edited.order_details.iter().enumerate() {
        for (bag_index, bag) in detail.bag_sizes.iter().enumerate() {
            let available = detail.incoming_order.available(&bag.size).unwrap_or(0);
            bag_rows.push((
                detail_index,
                bag_index,
                bag.size.clone(),
                available,
                bag.quantity_removed,
                bag.quantity_removed > available,
            ));
        }
    }

    rsx! {
        Modal {
            title: "Edit Delivery #{voucher_number}",
            on_close: move |_| draft.set(None),
            form { class: "form", onsubmit: submit,
                div { class: "form__section",
                    h3 { "Farmer Information" }
                    p { class: "cell-muted", "{farmer_name} · Farmer ID {edited.farmer_id}" }
                }

                div { class: "form__section",
                    label { class: "field",
                        span { class: "field__label", "Date of Extraction (DD.MM.YY)" }
                        input {
                            class: "field__input",
                            r#type: "text",
                            value: "{edited.date_of_extraction}",
                            oninput: move |evt| draft.with_mut(|draft| {
                                if let Some(draft) = draft {
                                    draft.date_of_extraction = evt.value();
                                }
                            }),
                        }
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
                    h3 { "Inventory Removed" }
                    div { class: "form__row",
                        label { class: "field",
                            span { class: "field__label", "Variety" }
                            input {
                                class: "field__input field__input--readonly",
                                r#type: "text",
                                readonly: true,
                                value: "{variety}",
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", "Storage Location" }
                            input {
                                class: "field__input field__input--readonly",
                                r#type: "text",
                                readonly: true,
                                value: "{location}",
                            }
                        }
                    }

                    for (detail_index, bag_index, size, available, removed, over) in bag_rows.into_iter() {
                        div { class: "form__row form__row--bags",
                            label { class: "field",
                                span { class: "field__label", "Size" }
                                input {
                                    class: "field__input field__input--readonly",
                                    r#type: "text",
                                    readonly: true,
                                    value: "{size}",
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", "Available Quantity" }
                                input {
                                    class: "field__input field__input--readonly",
                                    r#type: "number",
                                    readonly: true,
                                    value: "{available}",
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", "Quantity Removed" }
                                input {
                                    class: "field__input",
                                    r#type: "number",
                                    min: "0",
                                    max: "{available}",
                                    value: "{removed}",
                                    oninput: move |evt| draft.with_mut(|draft| {
                                        if let Some(bag) = draft.as_mut().and_then(|d| {
                                            d.order_details
                                                .get_mut(detail_index)?
                                                .bag_sizes
                                                .get_mut(bag_index)
                                        }) {
                                            bag.quantity_removed = evt.value().parse().unwrap_or(0);
                                        }
                                    }),
                                }
                                if over {
                                    span { class: "field__warning", "Cannot exceed available quantity" }
                                }
                            }
                        }
                    }
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
                        class: "button button--amber",
                        disabled: submitting() || blocked,
                        if submitting() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{BagStock, IncomingOrderRef, OutgoingOrderDetails, RemovedBagSize, Voucher};

    fn order_with_removal(removed: u32) -> OutgoingOrder {
        OutgoingOrder {
            id: "out1".into(),
            cold_storage_id: "c1".into(),
            farmer_id: "f1".into(),
            date_of_extraction: "11.03.25".into(),
            remarks: String::new(),
            voucher: Voucher {
                kind: "DELIVERY".into(),
                voucher_number: 55,
            },
            order_details: vec![OutgoingOrderDetails {
                variety: "Kufri Jyoti".into(),
                incoming_order: IncomingOrderRef {
                    id: "o1".into(),
                    location: "B-4".into(),
                    voucher: Voucher {
                        kind: "RECEIPT".into(),
                        voucher_number: 102,
                    },
                    incoming_bag_sizes: vec![BagStock {
                        size: "Seed".into(),
                        initial_quantity: 100,
                        current_quantity: 60,
                    }],
                },
                bag_sizes: vec![RemovedBagSize {
                    size: "Seed".into(),
                    quantity_removed: removed,
                }],
            }],
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn removal_within_availability_passes() {
        assert!(excess_removals(&order_with_removal(60)).is_empty());
        assert!(excess_removals(&order_with_removal(0)).is_empty());
    }

    #[test]
    fn over_removal_is_reported_with_the_limit() {
        let problems = excess_removals(&order_with_removal(61));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].size, "Seed");
        assert_eq!(problems[0].requested, 61);
        assert_eq!(problems[0].available, 60);
    }

    #[test]
    fn unknown_sizes_count_as_zero_availability() {
        let mut order = order_with_removal(1);
        order.order_details[0].bag_sizes[0].size = "Goli".into();
        let problems = excess_removals(&order);
        assert_eq!(problems[0].available, 0);
    }

    #[test]
    fn update_payload_references_the_incoming_order_by_id() {
        let update = build_update(&order_with_removal(10));
        assert_eq!(update.order_details[0].incoming_order.id, "o1");
        assert_eq!(update.order_details[0].bag_sizes[0].quantity_removed, 10);
    }
}
