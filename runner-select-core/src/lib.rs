//! Runner Select Core
//!
//! Core types and the selection logic for picking a CI runner.
//!
//! This crate contains:
//! - Domain types: Runners, labels and repositories as the hosting API reports them
//! - Selection: The first-match scan that decides between primary and fallback

pub mod domain;
pub mod error;
pub mod selection;

pub use error::ParseError;
pub use selection::{Selection, choose};
