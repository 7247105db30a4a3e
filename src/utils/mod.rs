//! Utility functions shared by the index and the query side.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration file and app data directory
//! - [`content`] - Binary detection, decoding and line offsets
//! - [`normalize`] - Text normalization and word splitting
//! - [`progress`] - Optional build spinner
//!
//! ```no_run
//! use autocomplete::utils::{normalize_text, split_words};
//!
//! assert_eq!(normalize_text("How to, learn!"), "how to learn");
//! assert_eq!(split_words("How to"), vec!["how", "to"]);
//! ```

pub mod app_data;
pub mod content;
pub mod normalize;
pub mod progress;

pub use app_data::*;
pub use content::*;
pub use normalize::*;
