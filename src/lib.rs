pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ConsoleReporter, TokenReader};
pub use config::{CliConfig, Settings};
pub use crate::core::{loops::LoopRunner, session::Session, validator::still_running};
pub use domain::model::{Bounds, LoopOutcome, LoopStyle, Messages, Triple};
pub use utils::error::{LoopError, Result};
