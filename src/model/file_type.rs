/// Icon shown next to a file type in the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileTypeIcon {
    Video,
    Book,
    Music,
    Archive,
    Image,
    Generic,
}

/// A file type filter: an extension alternation plus the tag the aggregator
/// engine uses for the same category.
#[derive(Debug, PartialEq, Eq)]
pub struct FileType {
    /// `|`-delimited extensions, empty for "no filter"
    pub pattern: &'static str,
    pub label: &'static str,
    pub result_tag: &'static str,
    pub icon: FileTypeIcon,
}

impl FileType {
    /// True when the entry restricts results by extension.
    pub fn has_pattern(&self) -> bool {
        !self.pattern.is_empty()
    }
}

pub static FILE_TYPES: [FileType; 6] = [
    FileType {
        pattern: "mkv|mp4|avi|mov|mpg|wmv|divx|mpeg",
        label: "TV/Movies",
        result_tag: "video",
        icon: FileTypeIcon::Video,
    },
    FileType {
        pattern: "MOBI|CBZ|CBR|CBC|CHM|EPUB|FB2|LIT|LRF|ODT|PDF|PRC|PDB|PML|RB|RTF|TCR|DOC|DOCX",
        label: "Books",
        result_tag: "ebook",
        icon: FileTypeIcon::Book,
    },
    FileType {
        pattern: "mp3|wav|ac3|ogg|flac|wma|m4a|aac|mod",
        label: "Music",
        result_tag: "audio",
        icon: FileTypeIcon::Music,
    },
    FileType {
        pattern: "exe|iso|dmg|tar|7z|bz2|gz|rar|zip|apk",
        label: "Software/Games",
        result_tag: "archive",
        icon: FileTypeIcon::Archive,
    },
    FileType {
        pattern: "jpg|png|bmp|gif|tif|tiff|psd",
        label: "Images",
        result_tag: "picture",
        icon: FileTypeIcon::Image,
    },
    FileType {
        pattern: "",
        label: "Other",
        result_tag: ALL_RESULTS_TAG,
        icon: FileTypeIcon::Generic,
    },
];

/// Aggregator tag used when no filter narrows the results.
pub const ALL_RESULTS_TAG: &str = "all";
