//! Three-coin casting.
//!
//! Each line is cast by tossing three coins whose faces are worth 2 and 3.
//! The total over three coins is always 6, 7, 8, or 9 and picks the line
//! value. Totals follow the binomial distribution of three fair tosses, not
//! a uniform choice among the four values: 6 and 9 each come up one time in
//! eight, 7 and 8 three times in eight.

use rand::Rng;

use crate::hexagram::Hexagram;
use crate::line::LineValue;

/// Casts one line by totalling three coins drawn from `rng`.
pub fn cast_line<R: Rng>(rng: &mut R) -> LineValue {
    let first: u8 = rng.random_range(2..=3);
    let second: u8 = rng.random_range(2..=3);
    let third: u8 = rng.random_range(2..=3);
    match first + second + third {
        6 => LineValue::OldYin,
        7 => LineValue::YoungYang,
        8 => LineValue::YoungYin,
        9 => LineValue::OldYang,
        _ => unreachable!(),
    }
}

/// Casts a complete hexagram: six lines, bottom to top.
///
/// Line 1 is cast first and sits at the bottom. Callers only ever see the
/// finished hexagram; there is no partially assembled state.
pub fn cast_hexagram<R: Rng>(rng: &mut R) -> Hexagram {
    let mut values = [LineValue::OldYin; 6];
    for value in &mut values {
        *value = cast_line(rng);
    }
    Hexagram::from_values(values)
}

/// Replays a fixed queue of sampler words; panics when the script runs dry.
///
/// A low word samples as coin face 2, a high word as face 3, so a line
/// scripted as `[HIGH, LOW, LOW]` totals 7.
#[cfg(test)]
pub(crate) struct ScriptedRng {
    words: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedRng {
    /// Word that samples as coin face 2.
    pub(crate) const LOW: u32 = 0;
    /// Word that samples as coin face 3.
    pub(crate) const HIGH: u32 = u32::MAX;

    pub(crate) fn new(words: &[u32]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    /// Scripts one line whose three coins total `total` (6 through 9).
    pub(crate) fn line_words(total: u8) -> Vec<u32> {
        let threes = usize::from(total - 6);
        let mut words = vec![Self::HIGH; threes];
        words.resize(3, Self::LOW);
        words
    }

    /// Scripts six lines from their coin totals, bottom line first.
    pub(crate) fn for_totals(totals: [u8; 6]) -> Self {
        let words: Vec<u32> = totals.iter().flat_map(|&t| Self::line_words(t)).collect();
        Self::new(&words)
    }
}

#[cfg(test)]
impl rand::RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.words.pop_front().expect("scripted rng ran out of words")
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
