#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Customize panel for the dashboard UI.
//! Theme, accent and font preferences are applied to the live document and kept in local storage.
//! Everything under `core` is DOM-free and runs natively; the browser adapters only build for wasm32.

pub mod core;

pub use crate::core::config::PanelConfig;
pub use crate::core::controller::{LoadOutcome, PreferenceController};
pub use crate::core::error::PrefsError;
pub use crate::core::record::PreferenceRecord;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::{apply_customize, close_customize, open_customize, run_app};
