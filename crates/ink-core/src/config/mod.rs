//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration structures and the TOML → DTO mapping. No validation and
//! no default values here: empty strings and zeros are facts reported by the
//! file, and the bootstrap layer decides what to do with them.

pub mod app_config;

pub use app_config::AppConfig;
