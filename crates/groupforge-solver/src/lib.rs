//! GroupForge grouping engine
//!
//! This crate provides the grouping algorithms:
//! - [`AlphaGrouper`]: alphabetical slices, the score-independent baseline
//! - [`RandomGrouper`]: slices of a shuffled roster
//! - [`GreedyGrouper`]: incremental best-match assembly
//! - [`WindowGrouper`]: sliding window local search
//! - Configuration wiring (builder module)

pub mod builder;
pub mod grouper;

pub use builder::{build_grouper, GrouperBuilder};
pub use grouper::{
    best_match, find_best_window, slice_list, windows, AlphaGrouper, GreedyGrouper, Grouper,
    RandomGrouper, WindowGrouper,
};
