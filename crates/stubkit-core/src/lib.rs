//! Core data types for stubkit: coordinate model, packages-file parsing,
//! configuration, and the embedded scaffold template system.

pub mod config;
pub mod coordinate;
pub mod packages;
pub mod template;
