//! HealthyMenu Library
//!
//! Healthiness scoring for restaurant menu items: label parsing, name-based
//! estimation, keyword signals, the scoring model and a settings store.

pub mod build_info;
pub mod db;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod settings;
pub mod tools;
