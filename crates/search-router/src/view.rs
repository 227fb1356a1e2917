/// View dispatch and the theme boundary
///
/// A resolved route selects exactly one of two rendering collaborators. The
/// collaborators receive their parameters explicitly; the theme is threaded
/// around every rendered outcome without the router ever looking at it.

use serde::{Deserialize, Serialize};

use crate::{PageParams, ResolvedRoute};

/// The two views a resolved route can render
///
/// # Examples
///
/// ```
/// use search_router::{resolve, PageParams, Views};
///
/// struct Labels;
///
/// impl Views for Labels {
///     type Output = String;
///
///     fn editor(&self) -> String {
///         "editor".to_string()
///     }
///
///     fn page(&self, params: &PageParams) -> String {
///         format!("navbar:{}", params.page)
///     }
/// }
///
/// let route = resolve("/explore").unwrap();
/// assert_eq!(route.dispatch(&Labels), Some("navbar:explore".to_string()));
/// ```
pub trait Views {
    type Output;

    /// Standalone editor, mounted without parameters
    fn editor(&self) -> Self::Output;

    /// Navbar-driven page view
    fn page(&self, params: &PageParams) -> Self::Output;
}

impl ResolvedRoute {
    /// Invokes the collaborator selected by this outcome
    ///
    /// Redirects render nothing; the navigator applies them instead.
    pub fn dispatch<V: Views>(&self, views: &V) -> Option<V::Output> {
        match self {
            ResolvedRoute::Editor => Some(views.editor()),
            ResolvedRoute::Page(params) => Some(views.page(params)),
            ResolvedRoute::Redirect { .. } => None,
        }
    }
}

/// Visual theme handed to rendered views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_theme_name")]
    pub name: String,

    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_secondary")]
    pub secondary: String,

    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_theme_name() -> String {
    "default".to_string()
}

fn default_primary() -> String {
    "#3f51b5".to_string()
}

fn default_secondary() -> String {
    "#f50057".to_string()
}

fn default_font_family() -> String {
    "Roboto, Helvetica, Arial, sans-serif".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            primary: default_primary(),
            secondary: default_secondary(),
            font_family: default_font_family(),
        }
    }
}

/// Rendered view output wrapped in the theme it was rendered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themed<'a, T, O> {
    pub theme: &'a T,
    pub content: O,
}

/// Wraps every rendered outcome in one theme value
///
/// `T` is opaque to the provider; any value works.
#[derive(Debug, Clone, Default)]
pub struct ThemeProvider<T> {
    theme: T,
}

impl<T> ThemeProvider<T> {
    pub fn new(theme: T) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// Renders `route` through `views`, wrapped in the theme
    ///
    /// Returns `None` when the outcome renders nothing (redirects).
    pub fn render<V: Views>(&self, route: &ResolvedRoute, views: &V) -> Option<Themed<'_, T, V::Output>> {
        route.dispatch(views).map(|content| Themed {
            theme: &self.theme,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records which collaborator was invoked
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl Views for Recorder {
        type Output = usize;

        fn editor(&self) -> usize {
            self.calls.borrow_mut().push("editor".to_string());
            self.calls.borrow().len()
        }

        fn page(&self, params: &PageParams) -> usize {
            self.calls.borrow_mut().push(format!(
                "page:{}:{}",
                params.page,
                params.dataset_id.as_deref().unwrap_or("-")
            ));
            self.calls.borrow().len()
        }
    }

    #[test]
    fn test_dispatch_invokes_exactly_one_collaborator() {
        let recorder = Recorder::default();

        let first = ResolvedRoute::Editor.dispatch(&recorder);
        let second =
            ResolvedRoute::Page(PageParams::new("explore").with_dataset("ds1")).dispatch(&recorder);

        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));

        assert_eq!(
            *recorder.calls.borrow(),
            vec!["editor".to_string(), "page:explore:ds1".to_string()]
        );
    }

    #[test]
    fn test_redirect_renders_nothing() {
        let recorder = Recorder::default();
        let redirect = ResolvedRoute::Redirect {
            to: "/explore".to_string(),
        };

        assert_eq!(redirect.dispatch(&recorder), None);
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_provider_wraps_output_in_theme() {
        let provider = ThemeProvider::new(Theme::default());
        let recorder = Recorder::default();

        let themed = provider.render(&ResolvedRoute::Editor, &recorder).unwrap();
        assert_eq!(themed.theme, &Theme::default());
        assert_eq!(themed.content, 1);
    }

    #[test]
    fn test_provider_accepts_any_theme_value() {
        let provider = ThemeProvider::new("dark");
        let recorder = Recorder::default();

        let themed = provider
            .render(&ResolvedRoute::Page(PageParams::new("about")), &recorder)
            .unwrap();
        assert_eq!(*themed.theme, "dark");
    }

    #[test]
    fn test_theme_from_partial_toml() {
        let theme: Theme = toml::from_str(r#"name = "weedcoco""#).unwrap();
        assert_eq!(theme.name, "weedcoco");
        assert_eq!(theme.primary, "#3f51b5");
    }
}
