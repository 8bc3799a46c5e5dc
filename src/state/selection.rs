// Selection state - query text, file type filter, engine and warning
use crate::dork;
use crate::error::{FinderError, Result};
use crate::io::UrlOpener;
use crate::model::{FileType, SearchEngine};

#[derive(Debug, Default)]
pub struct SelectionState {
    pub query: String,
    file_type: Option<&'static FileType>,
    engine: SearchEngine,
    warning: Option<String>,
}

impl SelectionState {
    pub fn new(engine: SearchEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    pub fn file_type(&self) -> Option<&'static FileType> {
        self.file_type
    }

    pub fn engine(&self) -> SearchEngine {
        self.engine
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn select_file_type(&mut self, file_type: &'static FileType) {
        self.file_type = Some(file_type);
    }

    pub fn select_engine(&mut self, engine: SearchEngine) {
        self.engine = engine;
    }

    /// URL for the current state, or `EmptyQuery` when the query is blank.
    pub fn compose(&self) -> Result<String> {
        if dork::is_blank(&self.query) {
            return Err(FinderError::EmptyQuery);
        }
        Ok(dork::build_url(self.engine, &self.query, self.file_type))
    }

    /// Compose the URL and hand it to `opener`.
    ///
    /// A validation failure sets the warning and opens nothing. Otherwise the
    /// warning is cleared before the URL is dispatched.
    pub fn compose_and_open<O: UrlOpener + ?Sized>(&mut self, opener: &O) -> Result<String> {
        let url = match self.compose() {
            Ok(url) => url,
            Err(e) => {
                self.warning = Some(e.to_string());
                return Err(e);
            }
        };
        self.warning = None;
        opener.open_url(&url)?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::browser::testing::RecordingOpener;
    use crate::model::FILE_TYPES;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest::sample::select;

    #[test]
    fn test_defaults() {
        let state = SelectionState::default();
        assert_eq!(state.engine(), SearchEngine::Google);
        assert!(state.file_type().is_none());
        assert!(state.warning().is_none());
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_whitespace_query_sets_warning() {
        let opener = RecordingOpener::default();
        for query in ["", " ", "\t\n  "] {
            let mut state = SelectionState::default();
            state.query = query.to_string();
            assert!(matches!(
                state.compose_and_open(&opener),
                Err(FinderError::EmptyQuery)
            ));
            assert_eq!(state.warning(), Some("Please enter a search query."));
        }
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_success_clears_warning_and_opens_once() {
        let opener = RecordingOpener::default();
        let mut state = SelectionState::default();
        assert!(state.compose_and_open(&opener).is_err());

        state.query = "The Batman 2022".to_string();
        state.select_file_type(&FILE_TYPES[0]);
        let url = state.compose_and_open(&opener).expect("should compose");

        assert!(state.warning().is_none());
        assert_eq!(*opener.opened.borrow(), vec![url.clone()]);
        assert!(url.starts_with("https://www.google.com/search?q=The%20Batman%202022%20%2B(mkv"));
    }

    #[test]
    fn test_open_failure_keeps_warning_cleared() {
        let opener = RecordingOpener::failing();
        let mut state = SelectionState::default();
        state.query = "dune".to_string();
        assert!(matches!(
            state.compose_and_open(&opener),
            Err(FinderError::Browser(_))
        ));
        assert!(state.warning().is_none());
    }

    #[test]
    fn test_engine_switch_keeps_query() {
        let mut state = SelectionState::new(SearchEngine::Searx);
        state.query = "  raw text ".to_string();
        for engine in SearchEngine::ALL {
            state.select_engine(engine);
            assert_eq!(state.query, "  raw text ");
            assert_eq!(state.engine(), engine);
        }
    }

    #[test]
    fn test_selecting_other_resets_filter() {
        let mut state = SelectionState::default();
        state.select_file_type(&FILE_TYPES[3]);
        state.select_file_type(&FILE_TYPES[5]);
        let active = state.file_type().expect("a filter is active");
        assert_eq!(active.label, "Other");
        assert!(active.pattern.is_empty());
        assert_eq!(active.result_tag, "all");
    }

    #[test]
    fn test_aggregator_ignores_filter_expression() {
        let mut state = SelectionState::new(SearchEngine::FilePursuit);
        state.query = "The Batman 2022".to_string();
        state.select_file_type(&FILE_TYPES[0]);
        assert_eq!(
            state.compose().expect("should compose"),
            "https://filepursuit.com/search/The+Batman+2022/type/video"
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let opener = RecordingOpener::default();
        let mut state = SelectionState::default();
        state.query = "\u{FEFF} ".to_string();
        assert!(matches!(
            state.compose_and_open(&opener),
            Err(FinderError::EmptyQuery)
        ));

        state.query = "\u{0085}".to_string();
        assert!(state.compose_and_open(&opener).is_ok());
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    fn blank_queries() -> impl Strategy<Value = String> {
        vec(
            select(vec![
                ' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{A0}', '\u{1680}', '\u{2003}',
                '\u{2028}', '\u{2029}', '\u{202F}', '\u{3000}', '\u{FEFF}',
            ]),
            0..24,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_blank_query_warns_and_opens_nothing(
            query in blank_queries(),
            engine in select(SearchEngine::ALL.to_vec()),
        ) {
            let opener = RecordingOpener::default();
            let mut state = SelectionState::new(engine);
            state.query = query;
            prop_assert!(matches!(
                state.compose_and_open(&opener),
                Err(FinderError::EmptyQuery)
            ));
            prop_assert_eq!(state.warning(), Some("Please enter a search query."));
            prop_assert!(opener.opened.borrow().is_empty());
        }
    }
}
