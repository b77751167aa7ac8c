//! Holonet Content Store
//!
//! Persistent data model and data-access layer for the Holonet
//! fan-content platform: users, posts, media attachments, comments,
//! favorites, and the character/planet reference catalog.
//!
//! # Modules
//!
//! - `models`: Entity structs and closed enumerations
//! - `db`: Repository functions over an explicit connection pool
//! - `validators`: Column-level constraint checks
//! - `error`: Error types and sqlx error classification
//! - `config`: Configuration management

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod validators;

pub use config::Config;
pub use error::{Result, StoreError};
