//! Casting orchestration.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogEntry};
use crate::coins::cast_hexagram;
use crate::error::CoreResult;
use crate::hexagram::Hexagram;
use crate::line::Line;
use crate::resolve::resolve;

/// Configuration for a casting service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingConfig {
    /// Seed for the random source. Castings with the same seed repeat the
    /// same line sequences; without one, the seed comes from the operating
    /// system.
    pub seed: Option<u64>,
}

impl CastingConfig {
    /// Sets a fixed seed for reproducible castings.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A hexagram paired with the catalog entry its signature resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramReading {
    /// The cast or settled hexagram.
    pub hexagram: Hexagram,
    /// Its catalog entry.
    pub entry: CatalogEntry,
}

/// The complete outcome of one casting.
///
/// Built once by [`CastingService::cast`] and immutable afterwards.
/// Persisting a result is the caller's separate, explicit step; a failed
/// save never invalidates the result itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastingResult {
    /// The question put to the oracle; may be empty.
    pub question: String,
    /// When the casting was performed.
    pub timestamp: DateTime<Utc>,
    /// The hexagram as cast, with its catalog entry.
    pub original: HexagramReading,
    /// The changing lines of the original, bottom first; possibly empty.
    pub changing_lines: Vec<Line>,
    /// The settled hexagram with its entry, present iff any line changes.
    pub resulting: Option<HexagramReading>,
}

impl CastingResult {
    /// Whether this casting produced a resulting hexagram.
    pub fn has_changes(&self) -> bool {
        !self.changing_lines.is_empty()
    }
}

/// Performs castings against a loaded catalog.
///
/// Owns the random source; seed it through [`CastingConfig`] when
/// reproducibility matters.
#[derive(Debug)]
pub struct CastingService {
    catalog: Catalog,
    rng: StdRng,
}

impl CastingService {
    /// Creates a service casting against `catalog`.
    pub fn new(catalog: Catalog, config: CastingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { catalog, rng }
    }

    /// The catalog this service casts against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Casts a complete hexagram for `question`.
    ///
    /// One casting is a single logical operation: it returns either a full
    /// result or an error, never a partial result. Lookup failures for the
    /// original or the resulting hexagram propagate to the caller.
    pub fn cast(&mut self, question: &str) -> CoreResult<CastingResult> {
        let hexagram = cast_hexagram(&mut self.rng);
        let entry = self.catalog.lookup_by_signature(hexagram.signature())?.clone();

        let resolution = resolve(&hexagram);
        let resulting = match resolution.resulting {
            Some(settled) => {
                let entry = self.catalog.lookup_by_signature(settled.signature())?.clone();
                Some(HexagramReading {
                    hexagram: settled,
                    entry,
                })
            }
            None => None,
        };

        Ok(CastingResult {
            question: question.to_owned(),
            timestamp: Utc::now(),
            original: HexagramReading { hexagram, entry },
            changing_lines: resolution.changing_lines,
            resulting,
        })
    }
}
