//! Extension-based file classification.

/// Semantic category of a file-system entry.
///
/// `Image` through `App` are content categories assigned by extension
/// lookup. `Download` and `Trash` are path-based pseudo-categories (the
/// `Download/` and `.trash/` subtrees); [`classify`] never returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Image,
    Video,
    Audio,
    Document,
    App,
    Download,
    Trash,
    Other,
}

impl Category {
    /// Parses a category name as used by the UI layer and the CLI.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "document" => Some(Self::Document),
            "app" => Some(Self::App),
            "download" => Some(Self::Download),
            "trash" => Some(Self::Trash),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns the lowercase name of this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::App => "app",
            Self::Download => "download",
            Self::Trash => "trash",
            Self::Other => "other",
        }
    }
}

/// Maps a file name to its content category.
///
/// Pure and total: a name with no `.` (no extension) is `Other`, and so
/// is any extension outside the fixed tables. Matching is
/// case-insensitive on the extension.
pub fn classify(name: &str) -> Category {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return Category::Other,
    };

    match ext.as_str() {
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp" | "heic" => Category::Image,
        "mp4" | "mov" | "avi" | "mkv" | "webm" => Category::Video,
        "mp3" | "wav" | "aac" | "flac" | "m4a" => Category::Audio,
        "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "txt" | "rtf" | "csv"
        | "md" => Category::Document,
        "apk" | "ipa" => Category::App,
        _ => Category::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_image_extensions() {
        for name in [
            "a.jpg", "a.jpeg", "a.png", "a.gif", "a.webp", "a.bmp", "a.heic",
        ] {
            assert_eq!(classify(name), Category::Image, "{name}");
        }
    }

    #[test]
    fn classify_video_extensions() {
        for name in ["a.mp4", "a.mov", "a.avi", "a.mkv", "a.webm"] {
            assert_eq!(classify(name), Category::Video, "{name}");
        }
    }

    #[test]
    fn classify_audio_extensions() {
        for name in ["a.mp3", "a.wav", "a.aac", "a.flac", "a.m4a"] {
            assert_eq!(classify(name), Category::Audio, "{name}");
        }
    }

    #[test]
    fn classify_document_extensions() {
        for name in [
            "a.pdf", "a.doc", "a.docx", "a.xls", "a.xlsx", "a.ppt", "a.pptx", "a.txt", "a.rtf",
            "a.csv", "a.md",
        ] {
            assert_eq!(classify(name), Category::Document, "{name}");
        }
    }

    #[test]
    fn classify_app_extensions() {
        assert_eq!(classify("tool.apk"), Category::App);
        assert_eq!(classify("tool.ipa"), Category::App);
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify("IMG.JPG"), Category::Image);
        assert_eq!(classify("img.jpg"), Category::Image);
        assert_eq!(classify("Clip.Mp4"), Category::Video);
    }

    #[test]
    fn classify_without_dot_is_other() {
        assert_eq!(classify("Makefile"), Category::Other);
        assert_eq!(classify(""), Category::Other);
    }

    #[test]
    fn classify_unknown_extension_is_other() {
        assert_eq!(classify("archive.zip"), Category::Other);
        assert_eq!(classify("code.rs"), Category::Other);
    }

    #[test]
    fn classify_uses_last_extension() {
        assert_eq!(classify("photo.txt.png"), Category::Image);
    }

    #[test]
    fn parse_round_trips_labels() {
        for cat in [
            Category::Image,
            Category::Video,
            Category::Audio,
            Category::Document,
            Category::App,
            Category::Download,
            Category::Trash,
            Category::Other,
        ] {
            assert_eq!(Category::parse(cat.label()), Some(cat));
        }
    }

    #[test]
    fn parse_unknown_is_none() {
        assert_eq!(Category::parse("archive"), None);
        assert_eq!(Category::parse("Image"), None);
    }
}
