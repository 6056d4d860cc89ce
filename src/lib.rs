//! FraudShield dashboard: a Leptos CSR client for the fraud-scoring API.
//!
//! Every panel fetches on its own and degrades on its own; nothing here
//! holds state beyond the latest response shown in each panel.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod pages;
pub mod tabs;
pub mod view_model;
