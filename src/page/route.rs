//! Site routes.

use std::fmt;
use std::path::PathBuf;

use percent_encoding::percent_decode_str;

use crate::utils::url::encode_segment;

/// An addressable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Skills,
    Contact,
    WorkIndex,
    WorkDetail(String),
}

impl Route {
    /// Routes that exist regardless of content.
    pub fn fixed() -> [Route; 6] {
        [
            Route::Home,
            Route::WorkIndex,
            Route::Services,
            Route::Skills,
            Route::About,
            Route::Contact,
        ]
    }

    /// Map a URL path to a route. Trailing slashes are ignored.
    ///
    /// ```ignore
    /// Route::parse("/work/hiring/") == Some(Route::WorkDetail("hiring".into()))
    /// Route::parse("/blog")          == None
    /// ```
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.strip_prefix('/')?.trim_end_matches('/');
        let route = match path {
            "" => Route::Home,
            "about" => Route::About,
            "services" => Route::Services,
            "skills" => Route::Skills,
            "contact" => Route::Contact,
            "work" => Route::WorkIndex,
            other => {
                let id = other.strip_prefix("work/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                let id = percent_decode_str(id).decode_utf8().ok()?;
                Route::WorkDetail(id.into_owned())
            }
        };
        Some(route)
    }

    /// URL path, no trailing slash except for the root.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Services => "/services".into(),
            Route::Skills => "/skills".into(),
            Route::Contact => "/contact".into(),
            Route::WorkIndex => "/work".into(),
            Route::WorkDetail(id) => format!("/work/{}", encode_segment(id)),
        }
    }

    /// Output file relative to the output directory.
    pub fn output_file(&self) -> PathBuf {
        match self {
            Route::Home => PathBuf::from("index.html"),
            Route::WorkDetail(id) => PathBuf::from("work").join(id).join("index.html"),
            other => PathBuf::from(other.path().trim_start_matches('/')).join("index.html"),
        }
    }

    /// Short kind name, for progress counters.
    pub const fn kind(&self) -> &'static str {
        match self {
            Route::WorkDetail(_) => "work",
            _ => "pages",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Output file for the not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/about"), Some(Route::About));
        assert_eq!(Route::parse("/services/"), Some(Route::Services));
        assert_eq!(Route::parse("/skills"), Some(Route::Skills));
        assert_eq!(Route::parse("/contact"), Some(Route::Contact));
        assert_eq!(Route::parse("/work"), Some(Route::WorkIndex));
    }

    #[test]
    fn test_parse_work_detail() {
        assert_eq!(
            Route::parse("/work/hrtech-platform/"),
            Some(Route::WorkDetail("hrtech-platform".into()))
        );
        assert_eq!(Route::parse("/work/a/b"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("/blog"), None);
        assert_eq!(Route::parse("about"), None);
        assert_eq!(Route::parse("/worker"), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in Route::fixed() {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        let detail = Route::WorkDetail("iot-fleet".into());
        assert_eq!(Route::parse(&detail.path()), Some(detail));
    }

    #[test]
    fn test_output_file() {
        assert_eq!(Route::Home.output_file(), PathBuf::from("index.html"));
        assert_eq!(Route::About.output_file(), PathBuf::from("about/index.html"));
        assert_eq!(
            Route::WorkDetail("x".into()).output_file(),
            PathBuf::from("work/x/index.html")
        );
    }

    #[test]
    fn test_path_encodes_identifier() {
        assert_eq!(Route::WorkDetail("a b".into()).path(), "/work/a%20b");
        assert_eq!(Route::WorkDetail("a b".into()).to_string(), "/work/a%20b");
        assert_eq!(Route::parse("/work/a%20b"), Some(Route::WorkDetail("a b".into())));
    }
}
