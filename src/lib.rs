//! World Builder backend: module CRUD over HTTP.
//!
//! Layout:
//! - `config`: environment configuration
//! - `db`: pool setup and migrations
//! - `services`: module store trait and its Postgres/in-memory backends
//! - `routes`: Axum router and handlers
//! - `state`: shared handler state

pub mod config;
pub mod db;
pub mod routes;
pub mod services;
pub mod state;
