//! CRUD web API managing user records over a volatile in memory store.

pub mod app;
pub mod base;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
