//! HTTP service exposing companies and their quirky news, backed by MongoDB
//! with a built-in sample dataset as fallback.

pub mod api;
pub mod config;
pub mod storage;
