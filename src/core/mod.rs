pub mod command;
pub mod handicap;
pub mod loader;
pub mod query;
pub mod session;
pub mod tokenizer;

pub use crate::domain::model::{GolfIndex, PlayerRound, Round};
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::Result;
