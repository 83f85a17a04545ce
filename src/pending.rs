use crate::style::StyleMap;

/// Scratch buffer backing the property panel.
///
/// Every field change lands here immediately (no debounce; later writes to
/// the same key overwrite), and nothing reaches the document until the
/// buffer is committed. Drained on commit, discarded on insertion and on
/// selection changes.
#[derive(Debug, Default, Clone)]
pub struct PendingEdits {
    edits: StyleMap,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.edits.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.edits.get(key).map(String::as_str)
    }

    /// Drains the buffer for a commit, leaving it empty.
    pub fn take(&mut self) -> StyleMap {
        std::mem::take(&mut self.edits)
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }
}
