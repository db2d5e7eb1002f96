pub mod classifier;
pub mod config;
pub mod error;
pub mod extract;
pub mod io;
pub mod phase;
pub mod pipeline;
pub mod sanitize;
pub mod scaffold;
pub mod spec;
pub mod types;
pub mod validate;

pub use error::{Result, SparcError};
