//! Errors raised while building the rule table or applying redirects
//!
//! Resolving a path never produces one of these: an unmatched path is simply
//! `None`. They only surface when a rule is malformed or when the navigator
//! keeps being redirected.

/// Rule construction and navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Template is not an absolute path or contains an empty segment
    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: &'static str },

    /// Parameter segment without a usable name (`:` or `:?`)
    #[error("invalid parameter segment `{segment}` in `{template}`")]
    InvalidParam { template: String, segment: String },

    /// Same parameter name declared twice
    #[error("parameter `{param}` declared more than once in `{template}`")]
    DuplicateParam { template: String, param: String },

    /// `:name?` followed by another segment
    #[error("optional parameter `{param}` must be the last segment of `{template}`")]
    OptionalNotTrailing { template: String, param: String },

    /// Redirect and editor rules match one exact path only
    #[error("route `{template}` must be an exact path without parameters")]
    UnexpectedParams { template: String },

    /// Page rule lacks a parameter the outcome needs
    #[error("route `{template}` is missing the `{param}` parameter")]
    MissingParam { template: String, param: &'static str },

    /// Redirect target is not an absolute path
    #[error("redirect target `{target}` must start with `/`")]
    InvalidRedirectTarget { target: String },

    /// Navigator followed too many chained redirects
    #[error("redirect limit of {limit} exceeded while resolving `{path}`")]
    RedirectLimit { path: String, limit: usize },
}
