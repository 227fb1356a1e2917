//! Segment classification for route templates
//!
//! Templates use the `:name` / `:name?` syntax, e.g. `/:page/:dataset_id?`.
//! All functions are **pure**: same input → same output, no side effects.

/// A single template segment
///
/// # Examples
///
/// ```
/// use search_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("editor"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment(":page"), PatternSegmentType::Required(_)));
/// assert!(matches!(classify_segment(":dataset_id?"), PatternSegmentType::Optional(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType {
    /// Optional parameter: `:dataset_id?`
    Optional(String),
    /// Required parameter: `:page`
    Required(String),
    /// Literal text segment
    Static(String),
}

impl PatternSegmentType {
    /// Parameter name, if this segment binds one
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegmentType::Optional(name) | PatternSegmentType::Required(name) => {
                Some(name)
            }
            PatternSegmentType::Static(_) => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, PatternSegmentType::Optional(_))
    }
}

/// Classifies a template segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional param**: `:name?`
/// 2. **Required param**: `:name`
/// 3. **Static**: anything else
///
/// Names are not validated here; an empty name is rejected by
/// [`parse_pattern`](crate::route::parser::parse_pattern).
pub fn classify_segment(segment: &str) -> PatternSegmentType {
    match segment.strip_prefix(':') {
        Some(param) => match param.strip_suffix('?') {
            Some(name) => PatternSegmentType::Optional(name.to_string()),
            None => PatternSegmentType::Required(param.to_string()),
        },
        None => PatternSegmentType::Static(segment.to_string()),
    }
}
