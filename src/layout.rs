//! Layout module for tracking UI component regions
//!
//! This module provides region tracking for position-aware mouse interactions.
//! The `LayoutRegions` struct records where the input and the suggestion panel
//! were drawn, and `region_at()` maps a screen position to a component or to
//! a specific suggestion row.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
