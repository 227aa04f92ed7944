use crate::core::validator::{in_range, still_running, triple_is_positive};
use crate::domain::model::{Bounds, LoopOutcome, LoopStyle, Messages, Triple};
use crate::domain::ports::{IntSource, Reporter};
use crate::utils::error::Result;

/// Drives one loop variant over a shared source and reporter.
pub struct LoopRunner<'a, S: IntSource, R: Reporter> {
    source: &'a mut S,
    reporter: &'a mut R,
    bounds: Bounds,
    messages: &'a Messages,
}

impl<'a, S: IntSource, R: Reporter> LoopRunner<'a, S, R> {
    pub fn new(
        source: &'a mut S,
        reporter: &'a mut R,
        bounds: Bounds,
        messages: &'a Messages,
    ) -> Self {
        Self {
            source,
            reporter,
            bounds,
            messages,
        }
    }

    pub fn run(&mut self, style: LoopStyle) -> Result<LoopOutcome> {
        tracing::debug!("Starting {} loop", style);
        let outcome = match style {
            LoopStyle::PostCondition => self.post_condition().map(LoopOutcome::Accepted),
            LoopStyle::PreCheck => self.pre_check().map(LoopOutcome::Accepted),
            LoopStyle::Unconditional => self.unconditional(),
            LoopStyle::Flag => self.flag_controlled(),
            LoopStyle::Guarded => self.guarded(),
        }?;
        tracing::debug!("Finished {} loop: {:?}", style, outcome);
        Ok(outcome)
    }

    /// Prompt, read, complain if out of range; the exit test sits at the bottom.
    pub fn post_condition(&mut self) -> Result<i64> {
        let messages = self.messages;
        loop {
            let value = self.read_with_prompt(&messages.range_prompt)?;
            if !in_range(value, self.bounds) {
                tracing::debug!("Rejected {} (outside {:?})", value, self.bounds);
                self.reporter.line(&self.messages.range_error)?;
            }
            if in_range(value, self.bounds) {
                return Ok(value);
            }
        }
    }

    /// Read once, then keep re-reading while the value fails the check.
    pub fn pre_check(&mut self) -> Result<i64> {
        let messages = self.messages;
        let mut value = self.read_with_prompt(&messages.range_prompt)?;
        while !in_range(value, self.bounds) {
            tracing::debug!("Rejected {} (outside {:?})", value, self.bounds);
            self.reporter.line(&messages.pre_check_error)?;
            value = self.read_with_prompt(&messages.range_prompt)?;
        }
        Ok(value)
    }

    /// `loop` with a `break` in the middle of the body.
    pub fn unconditional(&mut self) -> Result<LoopOutcome> {
        let mut accepted = 0;
        let last = loop {
            let triple = self.read_triple()?;
            if triple.a <= 0 || triple.b <= 0 || triple.c <= 0 {
                break triple;
            }
            self.congratulate(&triple, &mut accepted)?;
        };
        Ok(LoopOutcome::Stopped { last, accepted })
    }

    /// A `running` flag cleared by the body instead of a `break`.
    pub fn flag_controlled(&mut self) -> Result<LoopOutcome> {
        let mut accepted = 0;
        let mut running = true;
        let mut last = Triple::default();
        while running {
            last = self.read_triple()?;
            if !triple_is_positive(&last) {
                running = false;
            } else {
                self.congratulate(&last, &mut accepted)?;
            }
        }
        Ok(LoopOutcome::Stopped { last, accepted })
    }

    /// The positivity predicate is the loop condition itself.
    pub fn guarded(&mut self) -> Result<LoopOutcome> {
        let mut accepted = 0;
        let mut last = Triple::default();
        while still_running(last.a, last.b, last.c) {
            last = self.read_triple()?;
            if still_running(last.a, last.b, last.c) {
                self.congratulate(&last, &mut accepted)?;
            }
        }
        Ok(LoopOutcome::Stopped { last, accepted })
    }

    fn read_with_prompt(&mut self, prompt: &str) -> Result<i64> {
        self.reporter.prompt(prompt)?;
        self.source.next_int()
    }

    fn read_triple(&mut self) -> Result<Triple> {
        let messages = self.messages;
        let a = self.read_with_prompt(&messages.first_prompt)?;
        let b = self.read_with_prompt(&messages.second_prompt)?;
        let c = self.read_with_prompt(&messages.third_prompt)?;
        Ok(Triple::new(a, b, c))
    }

    fn congratulate(&mut self, triple: &Triple, accepted: &mut usize) -> Result<()> {
        *accepted += 1;
        tracing::debug!("Accepted triple #{}: {:?}", accepted, triple);
        self.reporter.line(&self.messages.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LoopError;
    use std::collections::VecDeque;

    struct ScriptedSource {
        values: VecDeque<i64>,
    }

    impl ScriptedSource {
        fn new(values: &[i64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl IntSource for ScriptedSource {
        fn next_int(&mut self) -> Result<i64> {
            self.values.pop_front().ok_or(LoopError::UnexpectedEof)
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        prompts: Vec<String>,
        lines: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn prompt(&mut self, text: &str) -> Result<()> {
            self.prompts.push(text.to_string());
            Ok(())
        }

        fn line(&mut self, text: &str) -> Result<()> {
            self.lines.push(text.to_string());
            Ok(())
        }
    }

    fn run(style: LoopStyle, input: &[i64]) -> (Result<LoopOutcome>, RecordingReporter) {
        let messages = Messages::default();
        let mut source = ScriptedSource::new(input);
        let mut reporter = RecordingReporter::default();
        let result =
            LoopRunner::new(&mut source, &mut reporter, Bounds::default(), &messages).run(style);
        (result, reporter)
    }

    #[test]
    fn test_range_loops_accept_first_value_immediately() {
        for style in [LoopStyle::PostCondition, LoopStyle::PreCheck] {
            let (result, reporter) = run(style, &[5]);
            assert_eq!(result.unwrap(), LoopOutcome::Accepted(5));
            assert!(reporter.lines.is_empty());
            assert_eq!(reporter.prompts.len(), 1);
        }
    }

    #[test]
    fn test_post_condition_reprompts_once_per_bad_value() {
        let (result, reporter) = run(LoopStyle::PostCondition, &[0, 11, -4, 10]);
        assert_eq!(result.unwrap(), LoopOutcome::Accepted(10));
        assert_eq!(reporter.prompts.len(), 4);
        assert_eq!(
            reporter.lines,
            vec!["The number must be between 1 and 10."; 3]
        );
    }

    #[test]
    fn test_pre_check_uses_its_own_error_text() {
        let (result, reporter) = run(LoopStyle::PreCheck, &[0, 5]);
        assert_eq!(result.unwrap(), LoopOutcome::Accepted(5));
        assert_eq!(reporter.lines, vec!["That number isn't between 1 and 10."]);
    }

    #[test]
    fn test_positivity_loops_agree() {
        let input = [1, 1, 1, 3, 4, 5, 2, 0, 9];
        for style in [LoopStyle::Unconditional, LoopStyle::Flag, LoopStyle::Guarded] {
            let (result, reporter) = run(style, &input);
            assert_eq!(
                result.unwrap(),
                LoopOutcome::Stopped {
                    last: Triple::new(2, 0, 9),
                    accepted: 2
                },
                "style {}",
                style
            );
            assert_eq!(reporter.lines.len(), 2);
            assert_eq!(reporter.prompts.len(), 9);
        }
    }

    #[test]
    fn test_positivity_loops_stop_on_first_bad_triple() {
        for style in [LoopStyle::Unconditional, LoopStyle::Flag, LoopStyle::Guarded] {
            let (result, reporter) = run(style, &[-1, 5, 5]);
            assert_eq!(
                result.unwrap(),
                LoopOutcome::Stopped {
                    last: Triple::new(-1, 5, 5),
                    accepted: 0
                }
            );
            assert!(reporter.lines.is_empty());
        }
    }

    #[test]
    fn test_triple_prompts_in_order() {
        let (_, reporter) = run(LoopStyle::Guarded, &[0, 0, 0]);
        assert_eq!(
            reporter.prompts,
            vec![
                "Please enter a positive number: ",
                "Please enter another positive number: ",
                "Please enter a third positive number: ",
            ]
        );
    }

    #[test]
    fn test_exhausted_input_is_an_error() {
        let (result, _) = run(LoopStyle::Unconditional, &[1, 1, 1, 2]);
        assert!(matches!(result, Err(LoopError::UnexpectedEof)));

        let (result, _) = run(LoopStyle::PostCondition, &[42]);
        assert!(matches!(result, Err(LoopError::UnexpectedEof)));
    }
}
