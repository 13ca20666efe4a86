//! Backend wire records. Field names follow the backend's camelCase JSON
//! (`_id` identifiers included) so these deserialize straight off the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdStorageDetails {
    pub cold_storage_name: String,
    pub cold_storage_address: String,
    pub cold_storage_contact_number: String,
    pub capacity: u32,
}

/// A cold-storage facility together with its owning store admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreAdmin {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cold_storage_details: ColdStorageDetails,
    #[serde(default)]
    pub registered_farmers: Vec<String>,
    #[serde(default)]
    pub personal_address: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub store_admin_id: u32,
    pub is_active: bool,
    #[serde(default)]
    pub is_paid: bool,
    /// Occupancy percentage reported by the backend. Older records omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub mobile_number: String,
    pub farmer_id: String,
    pub is_verified: bool,
    #[serde(default)]
    pub registered_store_admins: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(rename = "type")]
    pub kind: String,
    pub voucher_number: u32,
}

/// Bag counts for one size within an incoming order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub initial_quantity: u32,
    pub current_quantity: u32,
}

impl Quantity {
    /// Bags taken out so far. Displayed "Removed" is always initial − current.
    pub fn removed(&self) -> u32 {
        self.initial_quantity.saturating_sub(self.current_quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingBagSize {
    pub size: String,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingOrderDetails {
    pub variety: String,
    #[serde(default)]
    pub location: String,
    pub bag_sizes: Vec<IncomingBagSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub cold_storage_id: String,
    #[serde(default)]
    pub farmer_id: String,
    /// Submission date as recorded on the paper voucher, `DD.MM.YY`.
    pub date_of_submission: String,
    pub fulfilled: bool,
    #[serde(default)]
    pub remarks: String,
    pub voucher: Voucher,
    pub order_details: Vec<IncomingOrderDetails>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl IncomingOrder {
    pub fn total_initial(&self) -> u32 {
        self.order_details
            .iter()
            .flat_map(|detail| &detail.bag_sizes)
            .map(|bag| bag.quantity.initial_quantity)
            .sum()
    }

    pub fn total_current(&self) -> u32 {
        self.order_details
            .iter()
            .flat_map(|detail| &detail.bag_sizes)
            .map(|bag| bag.quantity.current_quantity)
            .sum()
    }

    pub fn total_removed(&self) -> u32 {
        self.order_details
            .iter()
            .flat_map(|detail| &detail.bag_sizes)
            .map(|bag| bag.quantity.removed())
            .sum()
    }

    pub fn varieties(&self) -> String {
        join_distinct(self.order_details.iter().map(|d| d.variety.as_str()))
    }

    pub fn locations(&self) -> String {
        join_distinct(self.order_details.iter().map(|d| d.location.as_str()))
    }
}

/// Current stock for one bag size, as stored on an incoming order reference
/// and in the per-variety stock summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BagStock {
    pub size: String,
    pub initial_quantity: u32,
    pub current_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingOrderRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub location: String,
    pub voucher: Voucher,
    #[serde(default)]
    pub incoming_bag_sizes: Vec<BagStock>,
}

impl IncomingOrderRef {
    /// Bags still available for the given size on the referenced order.
    pub fn available(&self, size: &str) -> Option<u32> {
        self.incoming_bag_sizes
            .iter()
            .find(|bag| bag.size == size)
            .map(|bag| bag.current_quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedBagSize {
    pub size: String,
    pub quantity_removed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingOrderDetails {
    pub variety: String,
    pub incoming_order: IncomingOrderRef,
    pub bag_sizes: Vec<RemovedBagSize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingOrder {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub cold_storage_id: String,
    #[serde(default)]
    pub farmer_id: String,
    pub date_of_extraction: String,
    #[serde(default)]
    pub remarks: String,
    pub voucher: Voucher,
    pub order_details: Vec<OutgoingOrderDetails>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl OutgoingOrder {
    pub fn total_removed(&self) -> u32 {
        self.order_details
            .iter()
            .flat_map(|detail| &detail.bag_sizes)
            .map(|bag| bag.quantity_removed)
            .sum()
    }

    pub fn varieties(&self) -> String {
        join_distinct(self.order_details.iter().map(|d| d.variety.as_str()))
    }

    pub fn locations(&self) -> String {
        join_distinct(
            self.order_details
                .iter()
                .map(|d| d.incoming_order.location.as_str()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarietyStock {
    pub variety: String,
    pub sizes: Vec<BagStock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopFarmer {
    #[serde(rename = "_id")]
    pub id: String,
    pub total_bags: u32,
    /// Bag count per size label, e.g. `{"Seed": 120, "Goli": 40}`.
    #[serde(default)]
    pub bag_summary: BTreeMap<String, u32>,
    pub farmer_id: String,
    pub farmer_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyBucket {
    /// Period label, e.g. `"2025-03"` or `"2025-Q1"`.
    pub period: String,
    pub count: u32,
    #[serde(default)]
    pub total_quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFrequency {
    pub order_count: u32,
    #[serde(default)]
    pub monthly_frequency: Vec<FrequencyBucket>,
    #[serde(default)]
    pub quarterly_frequency: Vec<FrequencyBucket>,
    /// Mean days between consecutive orders.
    #[serde(default)]
    pub avg_order_interval: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub token: String,
}

// --- request payloads ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingOrderUpdate {
    pub remarks: String,
    pub fulfilled: bool,
    pub date_of_submission: String,
    pub order_details: Vec<IncomingOrderDetails>,
}

/// Reference to an incoming order inside an outgoing-order update; the
/// backend only needs the id.
#[derive(Debug, Clone, Serialize)]
pub struct IncomingOrderId {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingDetailUpdate {
    pub variety: String,
    pub incoming_order: IncomingOrderId,
    pub bag_sizes: Vec<RemovedBagSize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingOrderUpdate {
    pub remarks: String,
    pub date_of_extraction: String,
    pub order_details: Vec<OutgoingDetailUpdate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmerUpdate {
    pub name: String,
    pub address: String,
    pub mobile_number: String,
    pub is_verified: bool,
}

// --- response envelopes ---

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ColdStoragesEnvelope {
    #[allow(dead_code)]
    #[serde(default)]
    pub status: String,
    pub store_admins: Vec<StoreAdmin>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    #[allow(dead_code)]
    #[serde(default)]
    pub status: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub message: String,
    pub data: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginEnvelope {
    #[allow(dead_code)]
    #[serde(default)]
    pub status: String,
    pub super_admin: Admin,
}

fn join_distinct<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_admin_decodes_backend_payload() {
        let raw = r#"{
            "status": "Success",
            "storeAdmins": [{
                "_id": "66f",
                "name": "R. Sharma",
                "coldStorageDetails": {
                    "coldStorageName": "Hilltop Cold Store",
                    "coldStorageAddress": "NH-31, Danapur",
                    "coldStorageContactNumber": "9876543210",
                    "capacity": 50000
                },
                "registeredFarmers": ["a", "b"],
                "mobileNumber": "9123456780",
                "storeAdminId": 7,
                "isActive": true,
                "isPaid": false,
                "occupancy": 62.5
            }]
        }"#;

        let envelope: ColdStoragesEnvelope = serde_json::from_str(raw).unwrap();
        let admin = &envelope.store_admins[0];
        assert_eq!(admin.id, "66f");
        assert_eq!(admin.cold_storage_details.capacity, 50000);
        assert_eq!(admin.registered_farmers.len(), 2);
        assert_eq!(admin.occupancy, Some(62.5));
    }

    #[test]
    fn incoming_order_totals_and_removed() {
        let raw = r#"{
            "_id": "o1",
            "coldStorageId": "c1",
            "farmerId": "f1",
            "dateOfSubmission": "04.02.25",
            "fulfilled": false,
            "remarks": "",
            "voucher": { "type": "RECEIPT", "voucherNumber": 102 },
            "orderDetails": [{
                "variety": "Kufri Jyoti",
                "location": "B-4",
                "bagSizes": [
                    { "size": "Seed", "quantity": { "initialQuantity": 100, "currentQuantity": 60 } },
                    { "size": "Goli", "quantity": { "initialQuantity": 40, "currentQuantity": 40 } }
                ]
            }]
        }"#;

        let order: IncomingOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.total_initial(), 140);
        assert_eq!(order.total_current(), 100);
        assert_eq!(order.total_removed(), 40);
        // removed is always initial − current, per bag size
        for bag in &order.order_details[0].bag_sizes {
            assert_eq!(
                bag.quantity.current_quantity + bag.quantity.removed(),
                bag.quantity.initial_quantity
            );
        }
    }

    #[test]
    fn outgoing_order_reads_location_from_incoming_ref() {
        let raw = r#"{
            "_id": "out1",
            "coldStorageId": "c1",
            "farmerId": "f1",
            "dateOfExtraction": "11.03.25",
            "remarks": "partial pickup",
            "voucher": { "type": "DELIVERY", "voucherNumber": 55 },
            "orderDetails": [{
                "variety": "Kufri Jyoti",
                "incomingOrder": {
                    "_id": "o1",
                    "location": "B-4",
                    "voucher": { "type": "RECEIPT", "voucherNumber": 102 },
                    "incomingBagSizes": [
                        { "size": "Seed", "initialQuantity": 100, "currentQuantity": 60 }
                    ]
                },
                "bagSizes": [{ "size": "Seed", "quantityRemoved": 40 }]
            }]
        }"#;

        let order: OutgoingOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.total_removed(), 40);
        assert_eq!(order.locations(), "B-4");
        assert_eq!(
            order.order_details[0].incoming_order.available("Seed"),
            Some(60)
        );
        assert_eq!(order.order_details[0].incoming_order.available("Goli"), None);
    }

    #[test]
    fn voucher_kind_round_trips_as_type() {
        let voucher = Voucher {
            kind: "RECEIPT".into(),
            voucher_number: 101,
        };
        let json = serde_json::to_value(&voucher).unwrap();
        assert_eq!(json["type"], "RECEIPT");
        assert_eq!(json["voucherNumber"], 101);
    }

    #[test]
    fn varieties_join_is_distinct() {
        let detail = |variety: &str| IncomingOrderDetails {
            variety: variety.into(),
            location: "A-1".into(),
            bag_sizes: Vec::new(),
        };
        let order = IncomingOrder {
            id: "o".into(),
            cold_storage_id: String::new(),
            farmer_id: String::new(),
            date_of_submission: "01.01.25".into(),
            fulfilled: false,
            remarks: String::new(),
            voucher: Voucher {
                kind: "RECEIPT".into(),
                voucher_number: 1,
            },
            order_details: vec![detail("Seed"), detail("Seed"), detail("Ration")],
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(order.varieties(), "Seed, Ration");
    }
}
