//! # Search Router
//!
//! Client-side view router for the dataset search front end. Given the
//! current URL path it selects the top-level view and extracts its
//! parameters:
//!
//! - `/` redirects to the landing view (`/explore`)
//! - `/editor` renders the standalone editor
//! - `/:page/:dataset_id?` renders a page view with an optional dataset
//!
//! Rules are evaluated in declaration order and the first structural match
//! wins. Resolution is a pure function of the rule table, the router options
//! and the path; an unmatched path resolves to `None` ("nothing rendered").
//!
//! ## Example
//!
//! ```
//! use search_router::{resolve, PageParams, ResolvedRoute};
//!
//! assert_eq!(
//!     resolve("/"),
//!     Some(ResolvedRoute::Redirect { to: "/explore".to_string() })
//! );
//! assert_eq!(resolve("/editor"), Some(ResolvedRoute::Editor));
//! assert_eq!(
//!     resolve("/explore/ds123"),
//!     Some(ResolvedRoute::Page(PageParams::new("explore").with_dataset("ds123")))
//! );
//! assert_eq!(resolve("/a/b/c"), None);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod navigation;
mod outcome;
pub mod path;
pub mod route;
pub mod view;

pub use config::{Config, RoutesConfig, RoutingConfig};
pub use error::RouterError;
pub use navigation::{History, Location, MemoryHistory, Navigator};
pub use outcome::{OutcomeKind, PageParams, ResolvedRoute, DATASET_PARAM, PAGE_PARAM};
pub use path::{decode_segment, is_valid_path, split_segments};
pub use route::{classify_segment, parse_pattern, ParsedPattern, PatternSegmentType};
pub use view::{Theme, ThemeProvider, Themed, Views};

// ============================================================================
// Core Types
// ============================================================================

/// A single rule of the route table
///
/// Only built through [`Route::redirect`], [`Route::editor`] and
/// [`Route::page`], so every rule holds a validated template and every
/// redirect rule a valid target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: String,
    segments: Vec<PatternSegmentType>,
    params: Vec<String>,
    optional_params: Vec<String>,
    action: RouteAction,
}

/// What a rule does on match
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteAction {
    Redirect(String),
    Editor,
    Page,
}

/// Options that shape how a path is compared with a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare static segments ignoring ASCII case
    pub case_insensitive: bool,
    /// Reject paths with a trailing `/`
    pub strict_trailing_slash: bool,
    /// Percent-decode parameter values
    pub decode_params: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            strict_trailing_slash: false,
            decode_params: true,
        }
    }
}

/// Result of matching a route against a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// The matched rule
    pub route: &'a Route,
    /// Raw parameters extracted from the path, keyed by template name
    pub params: HashMap<String, String>,
}

impl RouteMatch<'_> {
    /// Converts the match into the outcome handed to a collaborator
    pub fn into_resolved(self) -> ResolvedRoute {
        self.route.outcome(self.params)
    }
}

// ============================================================================
// Route Implementation
// ============================================================================

impl Route {
    fn from_template(template: &str, action: RouteAction) -> Result<Self, RouterError> {
        let ParsedPattern {
            pattern,
            segments,
            params,
            optional_params,
        } = route::parse_pattern(template)?;

        Ok(Route {
            pattern,
            segments,
            params,
            optional_params,
            action,
        })
    }

    /// Fails unless the route has no parameters
    fn exact(self) -> Result<Self, RouterError> {
        if self.params.is_empty() {
            Ok(self)
        } else {
            Err(RouterError::UnexpectedParams {
                template: self.pattern,
            })
        }
    }

    /// Creates a redirect rule matching exactly `from`
    ///
    /// # Examples
    ///
    /// ```
    /// use search_router::{OutcomeKind, Route};
    ///
    /// let route = Route::redirect("/", "/explore").unwrap();
    /// assert_eq!(route.kind(), OutcomeKind::Redirect);
    /// assert_eq!(route.redirect_to(), Some("/explore"));
    ///
    /// assert!(Route::redirect("/:page", "/explore").is_err());
    /// assert!(Route::redirect("/", "explore").is_err());
    /// ```
    pub fn redirect(from: &str, to: impl Into<String>) -> Result<Self, RouterError> {
        let target = to.into();
        if !path::is_valid_path(&target) {
            return Err(RouterError::InvalidRedirectTarget { target });
        }

        Self::from_template(from, RouteAction::Redirect(target))?.exact()
    }

    /// Creates the editor rule matching exactly `path`
    pub fn editor(path: &str) -> Result<Self, RouterError> {
        Self::from_template(path, RouteAction::Editor)?.exact()
    }

    /// Creates a page rule from a template binding `:page`
    ///
    /// `:page` must be a required parameter; `:dataset_id` is optional.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_router::Route;
    ///
    /// let route = Route::page("/:page/:dataset_id?").unwrap();
    /// assert_eq!(route.params(), ["page", "dataset_id"]);
    ///
    /// assert!(Route::page("/:view").is_err());
    /// ```
    pub fn page(template: &str) -> Result<Self, RouterError> {
        let route = Self::from_template(template, RouteAction::Page)?;
        let binds_page = route.params.iter().any(|p| p == PAGE_PARAM)
            && !route.optional_params.iter().any(|p| p == PAGE_PARAM);

        if binds_page {
            Ok(route)
        } else {
            Err(RouterError::MissingParam {
                template: route.pattern,
                param: PAGE_PARAM,
            })
        }
    }

    /// Canonical template like "/:page/:dataset_id?"
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn segments(&self) -> &[PatternSegmentType] {
        &self.segments
    }

    /// Parameter names in path order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn optional_params(&self) -> &[String] {
        &self.optional_params
    }

    /// Outcome produced on match
    pub fn kind(&self) -> OutcomeKind {
        match self.action {
            RouteAction::Redirect(_) => OutcomeKind::Redirect,
            RouteAction::Editor => OutcomeKind::RenderEditor,
            RouteAction::Page => OutcomeKind::RenderPage,
        }
    }

    /// Target path of a redirect rule
    pub fn redirect_to(&self) -> Option<&str> {
        match self.action {
            RouteAction::Redirect(ref target) => Some(target),
            _ => None,
        }
    }

    /// Whether this rule matches a single literal path
    pub fn is_exact(&self) -> bool {
        self.params.is_empty()
    }

    /// Matches this route against a path with default options
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        self.matches_with_options(path, &MatchOptions::default())
    }

    /// Matches this route against a path
    ///
    /// Walks template and path segments together. A trailing optional
    /// parameter may be left unfilled; every other segment must be consumed
    /// on both sides.
    pub fn matches_with_options(
        &self,
        path: &str,
        options: &MatchOptions,
    ) -> Option<HashMap<String, String>> {
        let path_segments = path::split_segments(path, options.strict_trailing_slash)?;

        // Tail-recursive walk over both slices
        fn match_segments(
            pattern: &[PatternSegmentType],
            path: &[&str],
            mut params: HashMap<String, String>,
            options: &MatchOptions,
        ) -> Option<HashMap<String, String>> {
            match (pattern.split_first(), path.split_first()) {
                (None, None) => Some(params),
                (None, Some(_)) => None,
                (Some((PatternSegmentType::Optional(_), rest)), None) => {
                    match_segments(rest, path, params, options)
                }
                (Some(_), None) => None,
                (Some((segment, rest_pattern)), Some((value, rest_path))) => match segment {
                    PatternSegmentType::Static(expected) => {
                        let matches = if options.case_insensitive {
                            expected.eq_ignore_ascii_case(value)
                        } else {
                            expected.as_str() == *value
                        };
                        if !matches {
                            return None;
                        }
                        match_segments(rest_pattern, rest_path, params, options)
                    }
                    PatternSegmentType::Required(name) | PatternSegmentType::Optional(name) => {
                        let value = if options.decode_params {
                            path::decode_segment(value).into_owned()
                        } else {
                            (*value).to_string()
                        };
                        params.insert(name.clone(), value);
                        match_segments(rest_pattern, rest_path, params, options)
                    }
                },
            }
        }

        match_segments(&self.segments, &path_segments, HashMap::new(), options)
    }

    /// Builds the outcome for a successful match
    fn outcome(&self, mut params: HashMap<String, String>) -> ResolvedRoute {
        match self.action {
            RouteAction::Redirect(ref target) => ResolvedRoute::Redirect {
                to: target.clone(),
            },
            RouteAction::Editor => ResolvedRoute::Editor,
            RouteAction::Page => ResolvedRoute::Page(PageParams {
                page: params.remove(PAGE_PARAM).unwrap_or_default(),
                dataset_id: params.remove(DATASET_PARAM),
            }),
        }
    }
}

// ============================================================================
// Router Implementation
// ============================================================================

/// Ordered rule table
///
/// Rules are kept in the order they were added; [`Router::resolve`] stops
/// at the first rule that matches. A router is immutable once built and can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    options: MatchOptions,
}

static DEFAULT_ROUTER: Lazy<Router> = Lazy::new(Router::search_app);

/// Resolves a path against the default rule table
///
/// See [`Router::search_app`] for the rules.
pub fn resolve(path: &str) -> Option<ResolvedRoute> {
    DEFAULT_ROUTER.resolve(path)
}

impl Router {
    /// Creates an empty router with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's rule table
    ///
    /// 1. `/` → redirect to `/explore`
    /// 2. `/editor` → editor
    /// 3. `/:page/:dataset_id?` → page
    pub fn search_app() -> Self {
        let root = Route {
            pattern: "/".to_string(),
            segments: Vec::new(),
            params: Vec::new(),
            optional_params: Vec::new(),
            action: RouteAction::Redirect(config::default_landing()),
        };
        let editor = Route {
            pattern: "/editor".to_string(),
            segments: vec![PatternSegmentType::Static("editor".to_string())],
            params: Vec::new(),
            optional_params: Vec::new(),
            action: RouteAction::Editor,
        };
        let page = Route {
            pattern: "/:page/:dataset_id?".to_string(),
            segments: vec![
                PatternSegmentType::Required(PAGE_PARAM.to_string()),
                PatternSegmentType::Optional(DATASET_PARAM.to_string()),
            ],
            params: vec![PAGE_PARAM.to_string(), DATASET_PARAM.to_string()],
            optional_params: vec![DATASET_PARAM.to_string()],
            action: RouteAction::Page,
        };

        Self::new().with_route(root).with_route(editor).with_route(page)
    }

    /// Builds the rule table and options described by a config
    pub fn from_config(config: &Config) -> Result<Self, RouterError> {
        let routes = &config.routes;
        let router = Self::new()
            .with_options(config.routing.match_options())
            .with_route(Route::redirect("/", routes.landing.clone())?)
            .with_route(Route::editor(&routes.editor)?)
            .with_route(Route::page(&routes.page)?);

        for (route, earlier) in router.shadowing() {
            tracing::warn!(
                "route {} is shadowed by earlier route {}",
                route.pattern,
                earlier.pattern
            );
        }
        Ok(router)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Replaces all match options
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Configures case sensitivity of static segments
    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.options.case_insensitive = case_insensitive;
        self
    }

    /// Configures trailing-slash strictness
    pub fn with_strict_trailing_slash(mut self, strict: bool) -> Self {
        self.options.strict_trailing_slash = strict;
        self
    }

    /// Configures percent-decoding of parameter values
    pub fn with_param_decoding(mut self, decode: bool) -> Self {
        self.options.decode_params = decode;
        self
    }

    /// Appends a rule after all existing ones
    ///
    /// A literal rule that an earlier rule already matches can never be
    /// reached; it is kept but reported through [`Router::shadowed_routes`].
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends several rules in order
    pub fn with_routes<I>(self, routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        routes.into_iter().fold(self, Router::with_route)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Returns the first rule matching `path`
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            let params = route.matches_with_options(path, &self.options);
            tracing::trace!(
                "route {} {} {:?}",
                route.pattern,
                if params.is_some() { "matched" } else { "skipped" },
                path
            );
            params.map(|params| RouteMatch { route, params })
        })
    }

    /// Resolves `path` to the outcome of the first matching rule
    ///
    /// # Examples
    ///
    /// ```
    /// use search_router::{PageParams, ResolvedRoute, Router};
    ///
    /// let router = Router::search_app();
    /// assert_eq!(
    ///     router.resolve("/explore"),
    ///     Some(ResolvedRoute::Page(PageParams::new("explore")))
    /// );
    /// ```
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        match self.match_route(path) {
            Some(route_match) => {
                tracing::debug!("resolved {:?} via {}", path, route_match.route.pattern);
                Some(route_match.into_resolved())
            }
            None => {
                tracing::debug!("no route matches {:?}", path);
                None
            }
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Rules in evaluation order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Rules that an earlier rule makes unreachable under the current options
    pub fn shadowed_routes(&self) -> impl Iterator<Item = &Route> {
        self.shadowing().map(|(route, _)| route)
    }

    /// Pairs each unreachable literal rule with the first earlier rule matching it
    fn shadowing(&self) -> impl Iterator<Item = (&Route, &Route)> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.is_exact())
            .filter_map(move |(idx, route)| {
                self.routes[..idx]
                    .iter()
                    .find(|earlier| {
                        earlier
                            .matches_with_options(&route.pattern, &self.options)
                            .is_some()
                    })
                    .map(|earlier| (route, earlier))
            })
    }
}
