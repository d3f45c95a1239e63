pub mod pages;

/// The four content pages and their paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Skills,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Skills, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Skills => "/skills",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Skills => "Skills",
            Route::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Home => "🏠",
            Route::About => "👤",
            Route::Skills => "📊",
            Route::Contact => "📞",
        }
    }

    /// Exact match only: `/skills/` and `/Skills` are unknown.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Navigation entry highlighted for `path`, if any.
pub fn selected_nav(path: &str) -> Option<Route> {
    Route::from_path(path)
}

/// One labelled step of the breadcrumb trail. The current page has no link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let home = Crumb {
        label: Route::Home.label(),
        href: None,
    };
    match Route::from_path(path) {
        Some(Route::Home) | None => vec![home],
        Some(route) => vec![
            Crumb {
                href: Some(Route::Home.path()),
                ..home
            },
            Crumb {
                label: route.label(),
                href: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(path: &str) -> Vec<&'static str> {
        breadcrumbs(path).iter().map(|crumb| crumb.label).collect()
    }

    #[test]
    fn skills_selects_its_entry_and_trail() {
        assert_eq!(selected_nav("/skills"), Some(Route::Skills));
        assert_eq!(labels("/skills"), vec!["Home", "Skills"]);
    }

    #[test]
    fn unknown_path_selects_nothing() {
        assert_eq!(selected_nav("/xyz"), None);
        assert_eq!(labels("/xyz"), vec!["Home"]);
        assert_eq!(selected_nav("/skills/"), None);
        assert_eq!(selected_nav(""), None);
    }

    #[test]
    fn home_trail_is_a_single_unlinked_crumb() {
        assert_eq!(
            breadcrumbs("/"),
            vec![Crumb {
                label: "Home",
                href: None
            }]
        );
    }

    #[test]
    fn sub_pages_link_back_home() {
        for route in [Route::About, Route::Skills, Route::Contact] {
            let trail = breadcrumbs(route.path());
            assert_eq!(trail.len(), 2);
            assert_eq!(trail[0].href, Some("/"));
            assert_eq!(trail[1].label, route.label());
            assert_eq!(trail[1].href, None);
        }
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
