//! Configuration loading, parsing, and validation

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{
    Config, InputConfig, OutputConfig, SearcherConfig, DEFAULT_LIST_SOURCE,
};
pub use validation::validate;
