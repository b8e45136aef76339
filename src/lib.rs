//! SmartBox Admin Library
//!
//! This crate provides the data layer for the SmartBox locker-rental admin
//! console: a typed async client for the remote REST backend plus the pure
//! view-side computations (row projection, filtering, aggregation) behind
//! the console's tables and dashboards.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;
pub mod views;

pub use auth::Session;
pub use client::ApiClient;
pub use config::AppConfig;
pub use errors::ApiError;
