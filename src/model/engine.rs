// Search engines the dork can be dispatched to

/// How an engine receives the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlTemplate {
    /// Encoded dork appended to a base ending in the query parameter.
    QueryParam { base: &'static str },
    /// Raw query and result tag as path segments: `{base}{raw}/type/{tag}`.
    PathSegments { base: &'static str },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchEngine {
    #[default]
    Google,
    Googol,
    Startpage,
    Searx,
    FilePursuit,
}

impl SearchEngine {
    /// Dropdown order.
    pub const ALL: [SearchEngine; 5] = [
        SearchEngine::Google,
        SearchEngine::Googol,
        SearchEngine::Startpage,
        SearchEngine::Searx,
        SearchEngine::FilePursuit,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Googol => "googol",
            Self::Startpage => "startpage",
            Self::Searx => "searx",
            Self::FilePursuit => "filepursuit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|engine| engine.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Googol => "Googol",
            Self::Startpage => "Startpage",
            Self::Searx => "Searx",
            Self::FilePursuit => "FilePursuit",
        }
    }

    pub fn template(self) -> UrlTemplate {
        match self {
            Self::Google => UrlTemplate::QueryParam {
                base: "https://www.google.com/search?q=",
            },
            Self::Googol => UrlTemplate::QueryParam {
                base: "https://googol.warriordudimanche.net/?q=",
            },
            Self::Startpage => UrlTemplate::QueryParam {
                base: "https://www.startpage.com/do/dsearch?query=",
            },
            Self::Searx => UrlTemplate::QueryParam {
                base: "https://searx.me/?q=",
            },
            Self::FilePursuit => UrlTemplate::PathSegments {
                base: "https://filepursuit.com/search/",
            },
        }
    }
}
