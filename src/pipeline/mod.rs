//! Pipeline module - the rough-set engine and dataset IO

pub mod approx;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod partition;
pub mod reduct;
pub mod rules;
pub mod table;
pub mod value;

pub use approx::*;
pub use error::RoughSetError;
pub use loader::*;
pub use metrics::*;
pub use partition::*;
pub use reduct::*;
pub use rules::*;
pub use table::*;
pub use value::Value;
