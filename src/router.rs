//! Path-style routes between the application's screens

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Browse,
    SampleDetail {
        id: String,
    },
    Submit,
    Profile,
    NotFound {
        path: String,
    },
}

impl Route {
    /// Resolves a path. Query strings, fragments and trailing slashes are ignored;
    /// anything unmatched becomes `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let without_query = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["browse"] => Route::Browse,
            ["sample", id] => Route::SampleDetail { id: id.to_string() },
            ["submit"] => Route::Submit,
            ["profile"] => Route::Profile,
            _ => Route::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Browse => "/browse".to_string(),
            Route::SampleDetail { id } => format!("/sample/{}", id),
            Route::Submit => "/submit".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Browse => "Browse Samples",
            Route::SampleDetail { .. } => "Sample",
            Route::Submit => "Submit Sample",
            Route::Profile => "Profile",
            Route::NotFound { .. } => "Not Found",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Home => "󰋜",
            Route::Browse => "",
            Route::SampleDetail { .. } => "",
            Route::Submit => "",
            Route::Profile => "",
            Route::NotFound { .. } => "",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Entries of the top navigation bar: (label, route, shortcut key)
pub fn nav_items() -> [(&'static str, Route, char); 4] {
    [
        ("Home", Route::Home, 'h'),
        ("Browse Samples", Route::Browse, 'b'),
        ("Submit Sample", Route::Submit, 's'),
        ("Profile", Route::Profile, 'p'),
    ]
}
