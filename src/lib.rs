pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::FileSource, toml_config::TomlConfig};

pub use crate::core::{
    command::Command,
    handicap::{calculate_handicap, format_handicap, format_score, INSUFFICIENT_DATA_HCP},
    loader::{load_index, load_lines},
    query::{QueryEngine, Report},
    session::Session,
    tokenizer::split,
};
pub use domain::model::{GolfIndex, PlayerRound, Round};
pub use utils::error::{GolfError, Result};
