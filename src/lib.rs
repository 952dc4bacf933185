pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod report;

pub use error::InputError;
pub use model::{ImpactOptions, InputVector};
pub use report::{ImpactReport, ModelKind};
