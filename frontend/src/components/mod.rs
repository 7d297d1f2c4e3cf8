//! UI Components for the ScanView application.
//!
//! # Layout Components
//! - [`Header`] - Title bar with backend status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadView`] - Image selection, preview and upload
//! - [`ErrorBanner`] - Last upload failure
//! - [`ResultCard`] - Predicted class and confidence

mod header;
mod hero;
mod upload;
mod error_banner;
mod result;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use error_banner::*;
pub use result::*;
pub use footer::*;
