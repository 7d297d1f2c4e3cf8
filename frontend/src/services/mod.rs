//! Prediction service communication.
//!
//! # Services
//!
//! - [`predict`] - multipart image upload to `/predict`
//! - [`preview`] - local data URL preview of the picked file
//! - [`health`] - `/health` probe for the header badge

pub mod predict;
pub mod preview;
pub mod health;

pub use predict::*;
pub use preview::*;
pub use health::*;
