//! Maven repository protocol: POM and metadata parsing, document download
//! with mirror fallback, and the on-disk POM cache.

pub mod cache;
pub mod download;
pub mod fetch;
pub mod metadata;
pub mod pom;
pub mod repository;
