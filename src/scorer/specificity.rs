use super::patterns::{MEASUREMENT_SOURCE, SPEC_CADENCE, UNIT_SYMBOL, UNIT_VOCABULARY};
use super::types::SpecificityTier;

/// The three independently detected specificity signals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpecificitySignals {
    pub units: bool,
    pub cadence: bool,
    pub source: bool,
}

impl SpecificitySignals {
    pub fn detect(text: &str) -> Self {
        Self {
            units: UNIT_VOCABULARY.is_match(text) || UNIT_SYMBOL.is_match(text),
            cadence: SPEC_CADENCE.is_match(text),
            source: MEASUREMENT_SOURCE.is_match(text),
        }
    }

    /// Cadence and source only count once units are present.
    pub fn tier(self) -> SpecificityTier {
        match (self.units, self.cadence, self.source) {
            (false, _, _) => SpecificityTier::NoUnits,
            (true, true, true) => SpecificityTier::FullySpecified,
            (true, false, true) => SpecificityTier::UnitsAndSource,
            (true, true, false) => SpecificityTier::UnitsAndCadence,
            (true, false, false) => SpecificityTier::UnitsOnly,
        }
    }
}

pub fn analyze(text: &str) -> SpecificityTier {
    SpecificitySignals::detect(text).tier()
}
