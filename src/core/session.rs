use crate::core::loops::LoopRunner;
use crate::domain::model::{Bounds, LoopOutcome, LoopStyle, Messages};
use crate::domain::ports::{IntSource, Reporter};
use crate::utils::error::Result;

/// One console session: a single input stream shared by every loop it runs.
pub struct Session<S: IntSource, R: Reporter> {
    source: S,
    reporter: R,
    bounds: Bounds,
    messages: Messages,
}

impl<S: IntSource, R: Reporter> Session<S, R> {
    pub fn new(source: S, reporter: R) -> Self {
        Self::with_settings(source, reporter, Bounds::default(), Messages::default())
    }

    pub fn with_settings(source: S, reporter: R, bounds: Bounds, messages: Messages) -> Self {
        Self {
            source,
            reporter,
            bounds,
            messages,
        }
    }

    pub fn run_style(&mut self, style: LoopStyle) -> Result<LoopOutcome> {
        LoopRunner::new(
            &mut self.source,
            &mut self.reporter,
            self.bounds,
            &self.messages,
        )
        .run(style)
    }

    /// The full walkthrough: range loop, `loop`/`break`, checkpoint line, then the guarded loop.
    pub fn run_all(&mut self) -> Result<Vec<LoopOutcome>> {
        tracing::info!("Running full loop walkthrough");
        let mut outcomes = Vec::with_capacity(3);

        outcomes.push(self.run_style(LoopStyle::PostCondition)?);
        outcomes.push(self.run_style(LoopStyle::Unconditional)?);
        self.reporter.line(&self.messages.past_second_loop)?;
        outcomes.push(self.run_style(LoopStyle::Guarded)?);

        tracing::info!("Walkthrough finished");
        Ok(outcomes)
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
