pub mod emit;
pub mod engine;
pub mod errors;
pub mod space;      // enumeration contract consumed by the engine
pub mod sweep;      // cross-product provider over template files
mod constraint;
mod value;

pub use constraint::ConstraintSet;
pub use engine::{run_job, scan, FilterJob};
pub use errors::{FilterError, Result, TemplateError};
pub use space::{Assignment, ConfigSpace};
pub use sweep::{ParamField, SweepTemplate};
pub use value::ParamValue;
