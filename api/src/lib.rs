//! REST client for the cold-storage backend. Domain records mirror the
//! backend's JSON wire format; the [`Client`] applies the admin bearer
//! token uniformly to every request.

pub mod client;
pub mod types;

pub use client::{ApiError, Client};
pub use types::*;
