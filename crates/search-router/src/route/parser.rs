/// Template parsing for route rules
///
/// Pure functional parser that turns a template such as `/:page/:dataset_id?`
/// into typed segments, rejecting templates the matcher cannot honour.

use super::pattern::{classify_segment, PatternSegmentType};
use crate::RouterError;

/// A validated route template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    /// Canonical template, e.g. "/:page/:dataset_id?"
    pub pattern: String,
    /// Segments in path order
    pub segments: Vec<PatternSegmentType>,
    /// All parameter names in path order
    pub params: Vec<String>,
    /// Names of the optional parameters
    pub optional_params: Vec<String>,
}

/// Fold accumulator: each step consumes and returns the state
#[derive(Default)]
struct ParseState {
    pattern: String,
    segments: Vec<PatternSegmentType>,
    params: Vec<String>,
    optional_params: Vec<String>,
}

impl ParseState {
    fn with_static_segment(mut self, segment: String) -> Self {
        self.pattern.push('/');
        self.pattern.push_str(&segment);
        self.segments.push(PatternSegmentType::Static(segment));
        self
    }

    fn with_required_param(mut self, name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.params.push(name.clone());
        self.segments.push(PatternSegmentType::Required(name));
        self
    }

    fn with_optional_param(mut self, name: String) -> Self {
        self.pattern.push_str("/:");
        self.pattern.push_str(&name);
        self.pattern.push('?');
        self.params.push(name.clone());
        self.optional_params.push(name.clone());
        self.segments.push(PatternSegmentType::Optional(name));
        self
    }

    fn finalize(mut self) -> ParsedPattern {
        if self.pattern.is_empty() {
            self.pattern = "/".to_string();
        }
        ParsedPattern {
            pattern: self.pattern,
            segments: self.segments,
            params: self.params,
            optional_params: self.optional_params,
        }
    }
}

/// Processes one segment, validating it against what has been parsed so far
fn process_segment(
    template: &str,
    state: ParseState,
    segment: &str,
) -> Result<ParseState, RouterError> {
    if segment.is_empty() {
        return Err(RouterError::InvalidTemplate {
            template: template.to_string(),
            reason: "empty segment",
        });
    }

    if let Some(previous) = state.optional_params.last() {
        return Err(RouterError::OptionalNotTrailing {
            template: template.to_string(),
            param: previous.clone(),
        });
    }

    let classified = classify_segment(segment);
    if let Some(name) = classified.param_name() {
        if name.is_empty() {
            return Err(RouterError::InvalidParam {
                template: template.to_string(),
                segment: segment.to_string(),
            });
        }
        if state.params.iter().any(|p| p == name) {
            return Err(RouterError::DuplicateParam {
                template: template.to_string(),
                param: name.to_string(),
            });
        }
    }

    Ok(match classified {
        PatternSegmentType::Optional(name) => state.with_optional_param(name),
        PatternSegmentType::Required(name) => state.with_required_param(name),
        PatternSegmentType::Static(seg) => state.with_static_segment(seg),
    })
}

/// Parses a route template (pure function)
///
/// A template must start with `/`. The root template `/` has no segments;
/// a single trailing `/` is ignored. Optional parameters may only appear as
/// the last segment.
///
/// # Examples
///
/// ```
/// use search_router::route::parser::parse_pattern;
///
/// let parsed = parse_pattern("/:page/:dataset_id?").unwrap();
/// assert_eq!(parsed.params, vec!["page", "dataset_id"]);
/// assert_eq!(parsed.optional_params, vec!["dataset_id"]);
///
/// assert!(parse_pattern("editor").is_err());
/// ```
pub fn parse_pattern(template: &str) -> Result<ParsedPattern, RouterError> {
    let body = template
        .strip_prefix('/')
        .ok_or_else(|| RouterError::InvalidTemplate {
            template: template.to_string(),
            reason: "must start with `/`",
        })?;

    if body.is_empty() {
        return Ok(ParseState::default().finalize());
    }

    body.strip_suffix('/')
        .unwrap_or(body)
        .split('/')
        .try_fold(ParseState::default(), |state, segment| {
            process_segment(template, state, segment)
        })
        .map(ParseState::finalize)
}
