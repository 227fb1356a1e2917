/// Browsing-context model
///
/// The resolver is pure; this module owns the one observable side effect:
/// a redirect outcome replaces the current history entry with its target.
/// A [`Navigator`] keeps exactly one live resolved route and recomputes it on
/// every navigation event.

use std::fmt;
use std::sync::Arc;

use crate::{config, ResolvedRoute, Router, RouterError};

/// A parsed location: pathname plus the raw search and hash parts
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    /// Includes the leading `?` when present
    pub search: String,
    /// Includes the leading `#` when present
    pub hash: String,
}

impl Location {
    /// Splits a URL path into pathname, search and hash
    ///
    /// # Examples
    ///
    /// ```
    /// use search_router::Location;
    ///
    /// let location = Location::parse("/explore/ds1?q=weed#top");
    /// assert_eq!(location.pathname, "/explore/ds1");
    /// assert_eq!(location.search, "?q=weed");
    /// assert_eq!(location.hash, "#top");
    /// ```
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find('#') {
            Some(idx) => (&url[..idx], &url[idx..]),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };

        let pathname = if pathname.is_empty() { "/" } else { pathname };

        Location {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

/// Session history of a browsing context
pub trait History {
    fn location(&self) -> &Location;

    /// Adds a new entry, discarding any forward entries
    fn push(&mut self, location: Location);

    /// Overwrites the current entry
    fn replace(&mut self, location: Location);

    /// Moves one entry back; false when already at the start
    fn back(&mut self) -> bool;

    /// Moves one entry forward; false when already at the end
    fn forward(&mut self) -> bool;
}

/// In-memory history with a cursor
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    /// Starts a history with one entry
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![Location::parse(initial)],
            index: 0,
        }
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &Location {
        &self.entries[self.index]
    }

    fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}

/// Drives a router from a history
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use search_router::{History, MemoryHistory, Navigator, PageParams, ResolvedRoute, Router};
///
/// let mut nav = Navigator::new(Arc::new(Router::search_app()), MemoryHistory::default());
/// let live = nav.sync().unwrap().cloned();
///
/// assert_eq!(nav.history().location().pathname, "/explore");
/// assert_eq!(live, Some(ResolvedRoute::Page(PageParams::new("explore"))));
/// ```
#[derive(Debug)]
pub struct Navigator<H: History> {
    router: Arc<Router>,
    history: H,
    current: Option<ResolvedRoute>,
    max_redirects: usize,
}

impl<H: History> Navigator<H> {
    pub fn new(router: Arc<Router>, history: H) -> Self {
        Self {
            router,
            history,
            current: None,
            max_redirects: config::default_max_redirects(),
        }
    }

    /// Limits how many chained redirects one sync follows
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The live resolved route, if the current location renders anything
    pub fn current(&self) -> Option<&ResolvedRoute> {
        self.current.as_ref()
    }

    /// Pushes `url` and resolves it
    pub fn navigate(&mut self, url: &str) -> Result<Option<&ResolvedRoute>, RouterError> {
        self.history.push(Location::parse(url));
        self.sync()
    }

    /// Goes back one entry and resolves it; unchanged when at the start
    pub fn back(&mut self) -> Result<Option<&ResolvedRoute>, RouterError> {
        if self.history.back() {
            self.sync()
        } else {
            Ok(self.current.as_ref())
        }
    }

    /// Goes forward one entry and resolves it; unchanged when at the end
    pub fn forward(&mut self) -> Result<Option<&ResolvedRoute>, RouterError> {
        if self.history.forward() {
            self.sync()
        } else {
            Ok(self.current.as_ref())
        }
    }

    /// Resolves the current location, applying redirects
    ///
    /// Each redirect replaces the current history entry; the chain stops at
    /// the first non-redirect outcome. The previous live route is dropped
    /// before resolving, so an error or no-match leaves nothing live.
    pub fn sync(&mut self) -> Result<Option<&ResolvedRoute>, RouterError> {
        self.current = None;
        let start = self.history.location().pathname.clone();
        let mut redirects = 0;

        loop {
            let pathname = self.history.location().pathname.clone();
            match self.router.resolve(&pathname) {
                Some(ResolvedRoute::Redirect { to }) => {
                    if redirects == self.max_redirects {
                        tracing::warn!("giving up on {} after {} redirects", start, redirects);
                        return Err(RouterError::RedirectLimit {
                            path: start,
                            limit: self.max_redirects,
                        });
                    }
                    tracing::info!("redirecting {} -> {}", pathname, to);
                    self.history.replace(Location::parse(&to));
                    redirects += 1;
                }
                resolved => {
                    self.current = resolved;
                    return Ok(self.current.as_ref());
                }
            }
        }
    }
}
