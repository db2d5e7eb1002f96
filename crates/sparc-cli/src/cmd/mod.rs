pub mod analyze;
pub mod config;
pub mod generate;
pub mod phase;
pub mod providers;
pub mod serve;
