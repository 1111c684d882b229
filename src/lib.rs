//! MyNews - a static news dashboard generator
//!
//! This crate fetches a fixed set of RSS/Atom feeds, normalizes their entries
//! into article records, and renders a single self-contained HTML page with
//! client-side filtering by source.

pub mod article;
pub mod fetcher;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod text;
