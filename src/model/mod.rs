mod engine;
mod file_type;

pub use engine::{SearchEngine, UrlTemplate};
pub use file_type::{FileType, FileTypeIcon, ALL_RESULTS_TAG, FILE_TYPES};
