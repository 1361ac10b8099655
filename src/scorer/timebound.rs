use super::patterns::{DEADLINE, QUARTER_MENTION, TIMEFRAME_CADENCE, VAGUE_TIMEFRAME};
use super::types::TimeBoundTier;

pub fn analyze(text: &str) -> TimeBoundTier {
    if DEADLINE.is_match(text) || TIMEFRAME_CADENCE.is_match(text) {
        TimeBoundTier::Deadline
    } else if QUARTER_MENTION.is_match(text) {
        TimeBoundTier::QuarterMentioned
    } else if VAGUE_TIMEFRAME.is_match(text) {
        TimeBoundTier::Vague
    } else {
        TimeBoundTier::NoTimeframe
    }
}
