use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Locale;

/// The four states of the rotating shift, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkState {
    /// Working during daytime
    WorkingDay,
    /// Working during nighttime
    WorkingNight,
    /// Not working, recovering after a night shift
    RestingAfterNight,
    /// Free day
    FreeDay,
}

/// Cycle order lookup table. Index 0 is the anchor day.
pub const CYCLE: [WorkState; 4] = [
    WorkState::WorkingDay,
    WorkState::WorkingNight,
    WorkState::RestingAfterNight,
    WorkState::FreeDay,
];

impl WorkState {
    /// Position of this state within [`CYCLE`]
    pub fn index(self) -> usize {
        match self {
            WorkState::WorkingDay => 0,
            WorkState::WorkingNight => 1,
            WorkState::RestingAfterNight => 2,
            WorkState::FreeDay => 3,
        }
    }

    /// State of the following calendar day
    pub fn successor(self) -> WorkState {
        CYCLE[(self.index() + 1) % CYCLE.len()]
    }

    /// State of the preceding calendar day
    pub fn predecessor(self) -> WorkState {
        CYCLE[(self.index() + CYCLE.len() - 1) % CYCLE.len()]
    }

    /// Whether the subject has a shift on this day
    pub fn is_working(self) -> bool {
        matches!(self, WorkState::WorkingDay | WorkState::WorkingNight)
    }

    pub fn color(self) -> ColorToken {
        match self {
            WorkState::WorkingDay => ColorToken::Red,
            WorkState::WorkingNight => ColorToken::Brown,
            WorkState::RestingAfterNight => ColorToken::RebeccaPurple,
            WorkState::FreeDay => ColorToken::Green,
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        locale.state_label(self)
    }

    /// Stable machine-readable name, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            WorkState::WorkingDay => "working_day",
            WorkState::WorkingNight => "working_night",
            WorkState::RestingAfterNight => "resting_after_night",
            WorkState::FreeDay => "free_day",
        }
    }
}

impl fmt::Display for WorkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named display color of a work state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Red,
    Brown,
    RebeccaPurple,
    Green,
}

impl ColorToken {
    /// CSS color keyword
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Red => "red",
            ColorToken::Brown => "brown",
            ColorToken::RebeccaPurple => "rebeccapurple",
            ColorToken::Green => "green",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Red => "#FF0000",
            ColorToken::Brown => "#A52A2A",
            ColorToken::RebeccaPurple => "#663399",
            ColorToken::Green => "#008000",
        }
    }

    /// Closest color in the xterm 256-color palette
    pub fn ansi256(self) -> u8 {
        match self {
            ColorToken::Red => 196,
            ColorToken::Brown => 124,
            ColorToken::RebeccaPurple => 61,
            ColorToken::Green => 28,
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_table_matches_index() {
        for (i, state) in CYCLE.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn test_successor_wraps_around() {
        assert_eq!(WorkState::WorkingDay.successor(), WorkState::WorkingNight);
        assert_eq!(WorkState::FreeDay.successor(), WorkState::WorkingDay);
        assert_eq!(WorkState::WorkingDay.predecessor(), WorkState::FreeDay);

        for state in CYCLE {
            assert_eq!(state.successor().predecessor(), state);
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(WorkState::WorkingDay.color().name(), "red");
        assert_eq!(WorkState::WorkingNight.color().name(), "brown");
        assert_eq!(WorkState::RestingAfterNight.color().name(), "rebeccapurple");
        assert_eq!(WorkState::FreeDay.color().name(), "green");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WorkState::RestingAfterNight).unwrap();
        assert_eq!(json, "\"resting_after_night\"");

        for state in CYCLE {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.as_str()));
        }
    }

    #[test]
    fn test_is_working() {
        assert!(WorkState::WorkingDay.is_working());
        assert!(WorkState::WorkingNight.is_working());
        assert!(!WorkState::RestingAfterNight.is_working());
        assert!(!WorkState::FreeDay.is_working());
    }
}
