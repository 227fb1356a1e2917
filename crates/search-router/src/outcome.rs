/// Resolution outcomes
///
/// A resolved route is a tagged variant: the caller matches on it (or
/// hands it to [`ResolvedRoute::dispatch`]) to pick exactly one rendering
/// collaborator.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Parameter name bound to the page view
pub const PAGE_PARAM: &str = "page";
/// Parameter name bound to the optional dataset segment in templates
pub const DATASET_PARAM: &str = "dataset_id";

/// What a rule does when it matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Redirect,
    RenderEditor,
    RenderPage,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutcomeKind::Redirect => write!(f, "redirect"),
            OutcomeKind::RenderEditor => write!(f, "editor"),
            OutcomeKind::RenderPage => write!(f, "page"),
        }
    }
}

/// Parameters handed to the page (navbar) view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
}

impl PageParams {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            dataset_id: None,
        }
    }

    pub fn with_dataset(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }
}

/// The single outcome of resolving one path
///
/// # Examples
///
/// ```
/// use search_router::{OutcomeKind, PageParams, ResolvedRoute};
///
/// let route = ResolvedRoute::Page(PageParams::new("explore").with_dataset("ds123"));
/// assert_eq!(route.kind(), OutcomeKind::RenderPage);
/// assert_eq!(route.params().get("datasetId"), Some(&"ds123".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolvedRoute {
    /// Location must change to `to`
    Redirect { to: String },
    /// Standalone editor, no parameters
    Editor,
    /// Generic page view
    Page(PageParams),
}

impl ResolvedRoute {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ResolvedRoute::Redirect { .. } => OutcomeKind::Redirect,
            ResolvedRoute::Editor => OutcomeKind::RenderEditor,
            ResolvedRoute::Page(_) => OutcomeKind::RenderPage,
        }
    }

    /// Parameters as a name → value mapping
    ///
    /// Page outcomes yield `page` and, when present, `datasetId`. Editor and
    /// redirect outcomes carry no parameters.
    pub fn params(&self) -> HashMap<String, String> {
        match self {
            ResolvedRoute::Page(params) => {
                let mut map = HashMap::new();
                map.insert("page".to_string(), params.page.clone());
                if let Some(ref dataset_id) = params.dataset_id {
                    map.insert("datasetId".to_string(), dataset_id.clone());
                }
                map
            }
            ResolvedRoute::Redirect { .. } | ResolvedRoute::Editor => HashMap::new(),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, ResolvedRoute::Redirect { .. })
    }

    /// Target path of a redirect outcome
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            ResolvedRoute::Redirect { to } => Some(to),
            _ => None,
        }
    }
}

impl fmt::Display for ResolvedRoute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResolvedRoute::Redirect { to } => write!(f, "redirect -> {}", to),
            ResolvedRoute::Editor => write!(f, "editor"),
            ResolvedRoute::Page(PageParams {
                page,
                dataset_id: Some(dataset_id),
            }) => write!(f, "page {} (dataset {})", page, dataset_id),
            ResolvedRoute::Page(PageParams { page, .. }) => write!(f, "page {}", page),
        }
    }
}
