//! # client
//!
//! Leptos + WASM frontend for the Arena model comparison tool.
//!
//! This crate contains the application shell, components, panel/credential/UI
//! state, and the streaming consumer that drains `/api/generate` responses
//! into per-panel updates. Pure state and parsing logic compiles natively so
//! tests run without a browser; everything that touches the DOM or network is
//! gated behind the `csr` feature.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
