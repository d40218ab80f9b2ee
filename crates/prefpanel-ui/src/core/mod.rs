//! Core, DOM-free primitives for the customize panel.
pub mod config;
pub mod controller;
pub mod error;
pub mod fonts;
pub mod memory;
pub mod panel;
pub mod record;
pub mod store;
pub mod surface;
pub mod theme;
