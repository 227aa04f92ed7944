pub mod loops;
pub mod session;
pub mod validator;

pub use crate::domain::model::{Bounds, LoopOutcome, LoopStyle, Messages, Triple};
pub use crate::domain::ports::{IntSource, Reporter};
pub use crate::utils::error::Result;
