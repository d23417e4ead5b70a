//! Browser adapters for the docchat core ports.
//!
//! Everything in this crate touches wasm-bindgen / web-sys; nothing in
//! `docchat-core` does.

pub mod api;
pub mod storage;
