//! CLI argument types and parsing helpers.
mod cli;
mod parsers;
mod types;


pub use cli::BenchArgs;
pub use types::PositiveU64;
