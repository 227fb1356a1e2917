//! Route module
//!
//! Pure components for route template parsing:
//! - `pattern` classifies individual segments
//! - `parser` validates whole templates

pub mod parser;
pub mod pattern;

pub use parser::{parse_pattern, ParsedPattern};
pub use pattern::{classify_segment, PatternSegmentType};
