//! Core domain types
//!
//! These types mirror the subset of the hosting API that runner selection
//! needs. They are read-only snapshots: fetched once per invocation and
//! never persisted.

pub mod label;
pub mod repository;
pub mod runner;
