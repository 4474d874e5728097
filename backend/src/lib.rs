//! # Route Dashboard
//!
//! Backend for a delivery-route analytics dashboard.
//!
//! Route records (one per driver per planned date) are loaded once from a
//! consolidated JSON document, then every request recomputes the dashboard
//! from scratch: filter by driver and date, sort by any column, aggregate the
//! summary panel, format table cells and build the chart datasets. A clock
//! widget and a five-day weather widget complete the page.
//!
//! ## Architecture
//!
//! - [`models`]: route records, filter criteria and sort state
//! - [`db`]: document loader and the in-memory repository
//! - [`services`]: the pure dashboard pipeline plus clock and weather
//! - [`routes`]: serializable view types and route paths
//! - [`api`]: DTO re-exports
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
