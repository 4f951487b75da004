//! Persistence layer for catalog snapshots

pub mod catalog;

pub use catalog::{load_catalog, save_catalog};
