//! Loading-state bookkeeping.
//!
//! # Design
//! - Snapshots live in a ledger keyed by element identity; nothing is stashed on the element.
//! - Acquisitions nest: the first one snapshots, later ones only deepen the count, and the
//!   snapshot comes back once the last acquisition is released.
//! - Forced clears exist for fallback timers that must end a loading state regardless of depth.

/// Class applied while an element is loading.
pub const LOADING_CLASS: &str = "loading";
/// Class of button-style elements, which keep their content and rely on CSS for the spinner.
pub const BUTTON_CLASS: &str = "btn";

/// State captured before an element enters the loading state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingSnapshot {
    /// Inner HTML at acquisition time.
    pub inner_html: String,
    /// Disabled flag at acquisition time.
    pub disabled: bool,
}

/// Outcome of an acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquire {
    /// The element was idle; a snapshot was taken and the loading state must be applied.
    First,
    /// The element was already loading; only the depth changed.
    Nested,
}

#[derive(Debug)]
struct Entry<K, S> {
    key: K,
    snapshot: S,
    depth: u32,
}

/// Snapshot ledger keyed by element identity.
///
/// Keys are compared with `==`; in the browser that is JS identity, so a cloned node is a
/// different key from its source. Few elements load at once, so a linear scan suffices.
#[derive(Debug)]
pub struct LoadingLedger<K, S> {
    entries: Vec<Entry<K, S>>,
}

impl<K, S> Default for LoadingLedger<K, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, S> LoadingLedger<K, S> {
    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == *key)
    }

    /// Enter the loading state for `key`, taking a snapshot only when it was idle.
    pub fn acquire(&mut self, key: K, snapshot: impl FnOnce() -> S) -> Acquire {
        if let Some(idx) = self.position(&key) {
            let entry = &mut self.entries[idx];
            entry.depth = entry.depth.saturating_add(1);
            return Acquire::Nested;
        }
        self.entries.push(Entry {
            key,
            snapshot: snapshot(),
            depth: 1,
        });
        Acquire::First
    }

    /// Leave one level; returns the snapshot once the last level is released.
    pub fn release(&mut self, key: &K) -> Option<S> {
        let idx = self.position(key)?;
        let entry = &mut self.entries[idx];
        entry.depth = entry.depth.saturating_sub(1);
        if entry.depth > 0 {
            return None;
        }
        Some(self.entries.swap_remove(idx).snapshot)
    }

    /// Drop every level at once and return the snapshot.
    pub fn clear(&mut self, key: &K) -> Option<S> {
        let idx = self.position(key)?;
        Some(self.entries.swap_remove(idx).snapshot)
    }

    /// Whether `key` is currently loading.
    #[must_use]
    pub fn is_loading(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Current nesting depth for `key` (zero when idle).
    #[must_use]
    pub fn depth(&self, key: &K) -> u32 {
        self.position(key).map_or(0, |idx| self.entries[idx].depth)
    }
}

/// Markup shown inside non-button elements while loading.
#[must_use]
pub fn spinner_markup(text: &str) -> String {
    format!(
        "<span class=\"spinner-border spinner-border-sm me-2\" role=\"status\" aria-hidden=\"true\"></span>{}",
        escape_text(text)
    )
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(html: &str, disabled: bool) -> LoadingSnapshot {
        LoadingSnapshot {
            inner_html: html.to_string(),
            disabled,
        }
    }

    #[test]
    fn acquire_then_release_returns_exact_snapshot() {
        let mut ledger = LoadingLedger::default();
        let original = snapshot("<i class=\"fa\"></i> Save  ", false);
        assert_eq!(ledger.acquire(1_u32, || original.clone()), Acquire::First);
        assert!(ledger.is_loading(&1));
        assert_eq!(ledger.release(&1), Some(original));
        assert!(!ledger.is_loading(&1));
    }

    #[test]
    fn release_without_acquire_is_a_no_op() {
        let mut ledger: LoadingLedger<u32, LoadingSnapshot> = LoadingLedger::default();
        assert_eq!(ledger.release(&7), None);
        assert_eq!(ledger.depth(&7), 0);
    }

    #[test]
    fn nested_acquisitions_keep_the_first_snapshot() {
        let mut ledger = LoadingLedger::default();
        ledger.acquire(1_u32, || snapshot("Submit", true));
        assert_eq!(
            ledger.acquire(1, || snapshot("spinner", true)),
            Acquire::Nested
        );
        assert_eq!(ledger.depth(&1), 2);
        assert_eq!(ledger.release(&1), None);
        assert_eq!(ledger.release(&1), Some(snapshot("Submit", true)));
    }

    #[test]
    fn clear_ignores_depth() {
        let mut ledger = LoadingLedger::default();
        ledger.acquire(3_u32, || snapshot("Go", false));
        ledger.acquire(3, || snapshot("ignored", false));
        assert_eq!(ledger.clear(&3), Some(snapshot("Go", false)));
        assert_eq!(ledger.release(&3), None);
    }

    #[derive(Debug)]
    struct Node(u8);

    // Identity keys: two nodes with equal content are still different elements.
    impl PartialEq for Node {
        fn eq(&self, other: &Self) -> bool {
            std::ptr::eq(self, other)
        }
    }

    #[test]
    fn copies_of_a_loading_element_do_not_share_its_entry() {
        let original = Node(1);
        let copy = Node(1);
        assert_eq!(original.0, copy.0);
        let mut ledger = LoadingLedger::default();
        ledger.acquire(&original, || snapshot("Submit", false));
        assert_eq!(ledger.release(&&copy), None);
        assert_eq!(ledger.clear(&&copy), None);
        assert_eq!(ledger.depth(&&original), 1);
        assert_eq!(ledger.release(&&original), Some(snapshot("Submit", false)));
    }

    #[test]
    fn spinner_markup_escapes_text() {
        let markup = spinner_markup("Saving <draft>");
        assert!(markup.starts_with("<span class=\"spinner-border spinner-border-sm me-2\""));
        assert!(markup.ends_with("Saving &lt;draft&gt;"));
    }
}
