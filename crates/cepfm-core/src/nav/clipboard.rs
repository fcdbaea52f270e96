//! Cut/copy staging for paste operations.

use crate::fs::entry::Entry;
use crate::fs::ops::PasteAction;

/// At most one pending `{entry, action}` staged by a cut or copy.
///
/// Immutable: every transition consumes `self` and returns a new
/// `Clipboard`, following the project-wide convention. A later cut or
/// copy replaces the pending item; a paste consumes it via
/// [`take`](Self::take). Never serialized — the clipboard lives for one
/// session only.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    pending: Option<(Entry, PasteAction)>,
}

impl Clipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `entry` for a move.
    pub fn cut(self, entry: Entry) -> Self {
        Self {
            pending: Some((entry, PasteAction::Move)),
        }
    }

    /// Stages `entry` for a copy.
    pub fn copy(self, entry: Entry) -> Self {
        Self {
            pending: Some((entry, PasteAction::Copy)),
        }
    }

    /// Clears any pending item.
    pub fn clear(self) -> Self {
        Self { pending: None }
    }

    /// Consumes the pending item for a paste, leaving the clipboard
    /// empty. Returns the emptied clipboard and the item, if any.
    pub fn take(self) -> (Self, Option<(Entry, PasteAction)>) {
        (Self { pending: None }, self.pending)
    }

    /// Returns the pending item without consuming it.
    pub fn pending(&self) -> Option<&(Entry, PasteAction)> {
        self.pending.as_ref()
    }

    /// Returns `true` when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StatInfo;
    use std::path::PathBuf;

    fn entry(name: &str) -> Entry {
        Entry::new(
            PathBuf::from("/data").join(name),
            &StatInfo {
                is_directory: false,
                size: 1,
            },
        )
    }

    #[test]
    fn new_clipboard_is_empty() {
        let clipboard = Clipboard::new();
        assert!(clipboard.is_empty());
        assert!(clipboard.pending().is_none());
    }

    #[test]
    fn cut_stages_a_move() {
        let clipboard = Clipboard::new().cut(entry("a.txt"));

        let (e, action) = clipboard.pending().unwrap();
        assert_eq!(e.name(), "a.txt");
        assert_eq!(*action, PasteAction::Move);
    }

    #[test]
    fn copy_stages_a_copy() {
        let clipboard = Clipboard::new().copy(entry("a.txt"));

        let (_, action) = clipboard.pending().unwrap();
        assert_eq!(*action, PasteAction::Copy);
    }

    #[test]
    fn later_staging_replaces_earlier() {
        let clipboard = Clipboard::new().cut(entry("first.txt")).copy(entry("second.txt"));

        let (e, action) = clipboard.pending().unwrap();
        assert_eq!(e.name(), "second.txt");
        assert_eq!(*action, PasteAction::Copy);
    }

    #[test]
    fn clear_empties_the_clipboard() {
        let clipboard = Clipboard::new().cut(entry("a.txt")).clear();
        assert!(clipboard.is_empty());
    }

    #[test]
    fn take_consumes_the_pending_item() {
        let clipboard = Clipboard::new().cut(entry("a.txt"));

        let (clipboard, item) = clipboard.take();

        assert!(clipboard.is_empty());
        let (e, action) = item.unwrap();
        assert_eq!(e.name(), "a.txt");
        assert_eq!(action, PasteAction::Move);
    }

    #[test]
    fn take_on_empty_returns_none() {
        let (clipboard, item) = Clipboard::new().take();
        assert!(clipboard.is_empty());
        assert!(item.is_none());
    }
}
