//! Report module - summaries and exports of inference results

pub mod rules_export;
pub mod summary;

pub use rules_export::*;
pub use summary::*;
