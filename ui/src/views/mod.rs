mod cold_storage_detail;
mod cold_storages;
mod dashboard;
mod farmer_detail;
mod incoming_receipt;
mod login;
mod outgoing_receipt;

pub use cold_storage_detail::ColdStorageDetailView;
pub use cold_storages::ColdStoragesView;
pub use dashboard::DashboardView;
pub use farmer_detail::FarmerDetailView;
pub use incoming_receipt::IncomingReceiptView;
pub use login::LoginView;
pub use outgoing_receipt::OutgoingReceiptView;
