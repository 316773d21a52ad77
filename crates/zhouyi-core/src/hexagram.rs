//! Cast hexagrams and their binary signatures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::line::{Line, LineValue, Polarity};

/// A hexagram's six-character binary signature.
///
/// One character per line, `'1'` for solid and `'0'` for broken. Cast
/// hexagrams derive their signature bottom line first: the first character
/// describes line 1. Signatures are the catalog's lookup key and are
/// compared as whole keys, never taken apart by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature([Polarity; 6]);

impl Signature {
    /// Builds a signature from six polarities, bottom line first.
    pub fn new(polarities: [Polarity; 6]) -> Self {
        Self(polarities)
    }

    /// The polarity recorded at `position` (1 through 6), or `None` outside
    /// that range.
    pub fn polarity_at(&self, position: u8) -> Option<Polarity> {
        if (1..=6).contains(&position) {
            Some(self.0[usize::from(position) - 1])
        } else {
            None
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for polarity in self.0 {
            let bit = match polarity {
                Polarity::Yang => '1',
                Polarity::Yin => '0',
            };
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl FromStr for Signature {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || CoreError::HexagramNotFound(format!("\"{s}\" is not a six-character binary signature"));
        if s.len() != 6 {
            return Err(invalid());
        }
        let mut polarities = [Polarity::Yin; 6];
        for (index, c) in s.chars().enumerate() {
            polarities[index] = match c {
                '1' => Polarity::Yang,
                '0' => Polarity::Yin,
                _ => return Err(invalid()),
            };
        }
        Ok(Self(polarities))
    }
}

impl TryFrom<String> for Signature {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.to_string()
    }
}

/// A cast hexagram: exactly six lines, bottom to top.
///
/// The signature is a pure function of the lines and is recomputed on
/// demand, never stored alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [Line; 6],
}

impl Hexagram {
    /// Builds a hexagram from six line values, assigning positions 1
    /// (bottom) through 6 (top) in order.
    pub fn from_values(values: [LineValue; 6]) -> Self {
        let mut lines = [Line::new(values[0], 1); 6];
        for (index, value) in values.into_iter().enumerate() {
            lines[index] = Line::new(value, index as u8 + 1);
        }
        Self { lines }
    }

    /// The six lines, bottom first.
    pub fn lines(&self) -> &[Line; 6] {
        &self.lines
    }

    /// The line at `position` (1 through 6), or `None` outside that range.
    pub fn line(&self, position: u8) -> Option<&Line> {
        if (1..=6).contains(&position) {
            Some(&self.lines[usize::from(position) - 1])
        } else {
            None
        }
    }

    /// The signature derived from the six base polarities, bottom line
    /// first.
    pub fn signature(&self) -> Signature {
        Signature::new(self.lines.map(|line| line.polarity()))
    }

    /// The changing lines, bottom first; possibly empty.
    pub fn changing_lines(&self) -> Vec<Line> {
        self.lines.iter().copied().filter(|line| line.is_changing()).collect()
    }

    /// Whether any line is changing.
    pub fn has_changing_lines(&self) -> bool {
        self.lines.iter().any(|line| line.is_changing())
    }
}
