//! Changing-line resolution.
//!
//! A cast with changing lines settles into a second hexagram: every old
//! line is replaced by the stable value of the opposite polarity, and every
//! young line carries over untouched. The original hexagram is left intact
//! for display and audit.

use crate::hexagram::Hexagram;
use crate::line::Line;

/// Outcome of resolving a cast hexagram's changing lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The changing lines of the original hexagram, bottom first.
    pub changing_lines: Vec<Line>,
    /// The settled hexagram, present only when at least one line changes.
    pub resulting: Option<Hexagram>,
}

/// Resolves the changing lines of `hexagram`.
///
/// A casting with no changing line at all is a normal outcome, not an
/// error; it happens in (3/4)^6, a little under one casting in five.
pub fn resolve(hexagram: &Hexagram) -> Resolution {
    let changing_lines = hexagram.changing_lines();
    if changing_lines.is_empty() {
        return Resolution {
            changing_lines,
            resulting: None,
        };
    }

    let values = hexagram.lines().map(|line| line.settled().value);
    Resolution {
        changing_lines,
        resulting: Some(Hexagram::from_values(values)),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::line::{LineValue, Polarity};

    fn line_value() -> impl Strategy<Value = LineValue> {
        prop_oneof![
            Just(LineValue::OldYin),
            Just(LineValue::YoungYang),
            Just(LineValue::YoungYin),
            Just(LineValue::OldYang),
        ]
    }

    #[test]
    fn stable_casts_resolve_to_nothing() {
        let hexagram = Hexagram::from_values([
            LineValue::YoungYang,
            LineValue::YoungYin,
            LineValue::YoungYang,
            LineValue::YoungYang,
            LineValue::YoungYin,
            LineValue::YoungYin,
        ]);
        let resolution = resolve(&hexagram);
        assert!(resolution.changing_lines.is_empty());
        assert!(resolution.resulting.is_none());
    }

    #[test]
    fn changing_lines_flip_and_stable_lines_carry_over() {
        let hexagram = Hexagram::from_values([
            LineValue::OldYin,
            LineValue::YoungYang,
            LineValue::OldYang,
            LineValue::YoungYin,
            LineValue::YoungYang,
            LineValue::YoungYin,
        ]);
        let resolution = resolve(&hexagram);

        let positions: Vec<u8> = resolution.changing_lines.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 3]);

        let resulting = resolution.resulting.expect("two lines changed");
        assert_eq!(resulting.line(1).map(|l| l.value), Some(LineValue::YoungYang));
        assert_eq!(resulting.line(3).map(|l| l.value), Some(LineValue::YoungYin));
        // Stable positions keep their exact values.
        assert_eq!(resulting.line(2).map(|l| l.value), Some(LineValue::YoungYang));
        assert_eq!(resulting.line(4).map(|l| l.value), Some(LineValue::YoungYin));
        assert_eq!(resulting.line(5).map(|l| l.value), Some(LineValue::YoungYang));
        assert_eq!(resulting.line(6).map(|l| l.value), Some(LineValue::YoungYin));
    }

    #[test]
    fn all_changing_lines_flip_every_polarity() {
        let hexagram = Hexagram::from_values([LineValue::OldYang; 6]);
        let resolution = resolve(&hexagram);
        assert_eq!(resolution.changing_lines.len(), 6);
        let resulting = resolution.resulting.expect("all lines changed");
        assert_eq!(resulting.signature().to_string(), "000000");
    }

    proptest! {
        #[test]
        fn flipping_the_changed_positions_back_recovers_the_original(
            values in proptest::array::uniform6(line_value()),
        ) {
            let original = Hexagram::from_values(values);
            let resolution = resolve(&original);

            let Some(resulting) = resolution.resulting else {
                prop_assert!(resolution.changing_lines.is_empty());
                return Ok(());
            };

            // Flip the resulting hexagram back at exactly the declared
            // changing positions; the original signature must reappear.
            let mut polarities = [Polarity::Yin; 6];
            for position in 1..=6u8 {
                let polarity = resulting
                    .signature()
                    .polarity_at(position)
                    .expect("position in range");
                let changed = resolution.changing_lines.iter().any(|l| l.position == position);
                polarities[usize::from(position) - 1] = match (polarity, changed) {
                    (p, false) => p,
                    (Polarity::Yang, true) => Polarity::Yin,
                    (Polarity::Yin, true) => Polarity::Yang,
                };
            }
            let recovered = crate::hexagram::Signature::new(polarities);
            prop_assert_eq!(recovered, original.signature());
        }

        #[test]
        fn resulting_hexagrams_are_always_stable(
            values in proptest::array::uniform6(line_value()),
        ) {
            let original = Hexagram::from_values(values);
            if let Some(resulting) = resolve(&original).resulting {
                prop_assert!(!resulting.has_changing_lines());
                prop_assert!(resolve(&resulting).resulting.is_none());
            }
        }

        #[test]
        fn changing_positions_differ_and_stable_positions_match(
            values in proptest::array::uniform6(line_value()),
        ) {
            let original = Hexagram::from_values(values);
            let resolution = resolve(&original);
            let Some(resulting) = resolution.resulting else {
                return Ok(());
            };
            for (before, after) in original.lines().iter().zip(resulting.lines()) {
                prop_assert_eq!(before.position, after.position);
                if before.is_changing() {
                    prop_assert_ne!(before.polarity(), after.polarity());
                } else {
                    prop_assert_eq!(before.value, after.value);
                }
            }
        }
    }
}
