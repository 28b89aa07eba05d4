//! Survey dataset acquisition: resolve a tabular dataset through an ordered
//! fallback chain (remote repository listing, fixed fallback URL, synthetic
//! generation), normalize its column names onto a canonical vocabulary, and
//! derive capability flags for downstream consumers.

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod process;
pub mod schema;
pub mod synth;
