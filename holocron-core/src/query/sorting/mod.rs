//! Sorting module for the film list
//!
//! This module provides:
//! - Core traits for sortable entities
//! - Field marker types for compile-time safe sorting
//! - Sort key extraction and comparison
//! - A stable single-field strategy and the mapping from [`SortBy`]
//!
//! [`SortBy`]: holocron_model::SortBy

pub mod fields;
pub mod fieldsets;
pub mod impls;
pub mod keys;
pub mod strategy;
pub mod traits;
pub mod utils;


pub use fields::*;
pub use fieldsets::*;
pub use impls::strategy_for;
pub use keys::*;
pub use strategy::*;
pub use traits::*;
