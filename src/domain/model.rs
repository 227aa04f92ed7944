use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three values read per iteration of the positivity loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Triple {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }
}

impl Default for Triple {
    /// 迴圈開始前的初始值，讓頂端條件第一次成立
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// Inclusive range for the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

/// Every literal the program prints. Defaults match the classic walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub range_prompt: String,
    pub range_error: String,
    pub pre_check_error: String,
    pub first_prompt: String,
    pub second_prompt: String,
    pub third_prompt: String,
    pub success: String,
    pub past_second_loop: String,
}

impl Messages {
    /// Defaults with the range wording rewritten for `bounds`.
    pub fn for_bounds(bounds: Bounds) -> Self {
        Self {
            range_prompt: format!(
                "Please enter a number between {} and {}: ",
                bounds.min, bounds.max
            ),
            range_error: format!("The number must be between {} and {}.", bounds.min, bounds.max),
            pre_check_error: format!(
                "That number isn't between {} and {}.",
                bounds.min, bounds.max
            ),
            ..Self::default()
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            range_prompt: "Please enter a number between 1 and 10: ".to_string(),
            range_error: "The number must be between 1 and 10.".to_string(),
            pre_check_error: "That number isn't between 1 and 10.".to_string(),
            first_prompt: "Please enter a positive number: ".to_string(),
            second_prompt: "Please enter another positive number: ".to_string(),
            third_prompt: "Please enter a third positive number: ".to_string(),
            success: "Congratulations!  You entered three positive numbers.".to_string(),
            past_second_loop: "You've made it past the second loop.".to_string(),
        }
    }
}

/// Which loop shape to demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LoopStyle {
    /// Range loop, condition checked at the bottom.
    PostCondition,
    /// Range loop, read once then condition checked at the top.
    PreCheck,
    /// Endless loop left through an internal break.
    Unconditional,
    /// Loop driven by a `running` flag.
    Flag,
    /// Loop whose condition is the positivity predicate itself.
    Guarded,
}

impl LoopStyle {
    pub const ALL: [LoopStyle; 5] = [
        LoopStyle::PostCondition,
        LoopStyle::PreCheck,
        LoopStyle::Unconditional,
        LoopStyle::Flag,
        LoopStyle::Guarded,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LoopStyle::PostCondition => "post-condition",
            LoopStyle::PreCheck => "pre-check",
            LoopStyle::Unconditional => "unconditional",
            LoopStyle::Flag => "flag",
            LoopStyle::Guarded => "guarded",
        }
    }
}

impl fmt::Display for LoopStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoopStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoopStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| format!("unknown loop style: {}", s))
    }
}

/// What a finished loop hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// A range loop accepted this value.
    Accepted(i64),
    /// A positivity loop stopped on `last` after `accepted` good triples.
    Stopped { last: Triple, accepted: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_style_round_trips_through_name() {
        for style in LoopStyle::ALL {
            assert_eq!(style.name().parse::<LoopStyle>(), Ok(style));
        }
        assert!("while-true".parse::<LoopStyle>().is_err());
    }

    #[test]
    fn test_messages_for_default_bounds_match_defaults() {
        assert_eq!(Messages::for_bounds(Bounds::default()), Messages::default());
    }

    #[test]
    fn test_messages_for_custom_bounds() {
        let messages = Messages::for_bounds(Bounds { min: -3, max: 3 });
        assert_eq!(messages.range_prompt, "Please enter a number between -3 and 3: ");
        assert_eq!(messages.range_error, "The number must be between -3 and 3.");
        assert_eq!(messages.success, Messages::default().success);
    }
}
