//! Line values and cast lines.
//!
//! A hexagram stacks six lines. Each line is cast by totalling three coins
//! (faces worth 2 and 3), which gives one of four values. The two "old"
//! values are changing lines and settle into the opposite polarity when the
//! resulting hexagram is derived; the two "young" values are stable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Base polarity of a line: solid (yang) or broken (yin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// A solid line.
    Yang,
    /// A broken line.
    Yin,
}

/// The four values a cast line can take, in coin-total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineValue {
    /// Coin total 6: broken and changing.
    OldYin,
    /// Coin total 7: solid and stable.
    YoungYang,
    /// Coin total 8: broken and stable.
    YoungYin,
    /// Coin total 9: solid and changing.
    OldYang,
}

impl LineValue {
    /// All four values, in coin-total order.
    pub fn all() -> [LineValue; 4] {
        [
            LineValue::OldYin,
            LineValue::YoungYang,
            LineValue::YoungYin,
            LineValue::OldYang,
        ]
    }

    /// The base polarity this value draws.
    pub fn polarity(self) -> Polarity {
        match self {
            LineValue::YoungYang | LineValue::OldYang => Polarity::Yang,
            LineValue::YoungYin | LineValue::OldYin => Polarity::Yin,
        }
    }

    /// Whether this value changes when the resulting hexagram is derived.
    pub fn is_changing(self) -> bool {
        matches!(self, LineValue::OldYin | LineValue::OldYang)
    }

    /// The three-coin total that casts this value.
    pub fn coin_total(self) -> u8 {
        match self {
            LineValue::OldYin => 6,
            LineValue::YoungYang => 7,
            LineValue::YoungYin => 8,
            LineValue::OldYang => 9,
        }
    }

    /// The stable value this one settles into: old yin becomes young yang,
    /// old yang becomes young yin, young values stay as they are.
    pub fn settled(self) -> LineValue {
        match self {
            LineValue::OldYin => LineValue::YoungYang,
            LineValue::OldYang => LineValue::YoungYin,
            stable => stable,
        }
    }
}

impl fmt::Display for LineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineValue::OldYin => "Old Yin",
            LineValue::YoungYang => "Young Yang",
            LineValue::YoungYin => "Young Yin",
            LineValue::OldYang => "Old Yang",
        };
        write!(f, "{name}")
    }
}

/// One cast line: a value at a position.
///
/// Positions run 1 through 6 from the bottom of the hexagram up. Lines are
/// immutable once cast; settling produces a new line, never a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// The cast value.
    pub value: LineValue,
    /// Position within the hexagram, 1 (bottom) through 6 (top).
    pub position: u8,
}

impl Line {
    /// Creates a line with `value` at `position` (1 through 6).
    pub fn new(value: LineValue, position: u8) -> Self {
        Self { value, position }
    }

    /// Whether this line is changing.
    pub fn is_changing(self) -> bool {
        self.value.is_changing()
    }

    /// The base polarity of this line.
    pub fn polarity(self) -> Polarity {
        self.value.polarity()
    }

    /// The stable line this one settles into, at the same position.
    pub fn settled(self) -> Line {
        Line {
            value: self.value.settled(),
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polarity_follows_the_value() {
        assert_eq!(LineValue::OldYin.polarity(), Polarity::Yin);
        assert_eq!(LineValue::YoungYin.polarity(), Polarity::Yin);
        assert_eq!(LineValue::OldYang.polarity(), Polarity::Yang);
        assert_eq!(LineValue::YoungYang.polarity(), Polarity::Yang);
    }

    #[test]
    fn only_old_values_change() {
        assert!(LineValue::OldYin.is_changing());
        assert!(LineValue::OldYang.is_changing());
        assert!(!LineValue::YoungYang.is_changing());
        assert!(!LineValue::YoungYin.is_changing());
    }

    #[test]
    fn coin_totals_cover_six_through_nine() {
        let totals: Vec<u8> = LineValue::all().iter().map(|v| v.coin_total()).collect();
        assert_eq!(totals, vec![6, 7, 8, 9]);
    }

    #[test]
    fn settling_flips_old_values_and_keeps_young_ones() {
        assert_eq!(LineValue::OldYin.settled(), LineValue::YoungYang);
        assert_eq!(LineValue::OldYang.settled(), LineValue::YoungYin);
        assert_eq!(LineValue::YoungYang.settled(), LineValue::YoungYang);
        assert_eq!(LineValue::YoungYin.settled(), LineValue::YoungYin);
    }

    #[test]
    fn settled_values_are_never_changing() {
        for value in LineValue::all() {
            assert!(!value.settled().is_changing(), "{value} settled into a changing value");
        }
    }

    #[test]
    fn settling_an_old_line_flips_its_polarity_in_place() {
        let line = Line::new(LineValue::OldYang, 3);
        let settled = line.settled();
        assert_eq!(settled.position, 3);
        assert_eq!(settled.value, LineValue::YoungYin);
        assert_ne!(settled.polarity(), line.polarity());
    }

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(LineValue::OldYin.to_string(), "Old Yin");
        assert_eq!(LineValue::YoungYang.to_string(), "Young Yang");
        assert_eq!(LineValue::YoungYin.to_string(), "Young Yin");
        assert_eq!(LineValue::OldYang.to_string(), "Old Yang");
    }

    #[test]
    fn line_values_serialize_as_snake_case() {
        let json = serde_json::to_string(&LineValue::OldYin).unwrap();
        assert_eq!(json, "\"old_yin\"");
        let back: LineValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LineValue::OldYin);
    }

    #[test]
    fn lines_round_trip_through_serde() {
        let line = Line::new(LineValue::YoungYin, 5);
        let json = serde_json::to_string(&line).unwrap();
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
