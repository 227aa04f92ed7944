use crate::utils::error::Result;

/// Something integers can be pulled from, one per call.
pub trait IntSource {
    fn next_int(&mut self) -> Result<i64>;
}

/// Where prompts and status lines go.
pub trait Reporter {
    /// Writes `text` without a newline and flushes, so it shows before a blocking read.
    fn prompt(&mut self, text: &str) -> Result<()>;
    fn line(&mut self, text: &str) -> Result<()>;
}
