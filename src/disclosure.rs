//! Collapsible FAQ entries.
//!
//! Each panel owns one open/closed flag. Flags are transient: every
//! session starts with all panels closed.

use serde::{Deserialize, Serialize};

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Independent open flags, indexed by panel id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosurePanels {
    open: Vec<bool>,
}

impl DisclosurePanels {
    /// `count` panels, all closed.
    pub fn new(count: usize) -> Self {
        Self {
            open: vec![false; count],
        }
    }

    /// Flip one panel and return its new state.
    ///
    /// Unknown ids leave everything untouched and return `None`.
    pub fn toggle(&mut self, id: usize) -> Option<bool> {
        let flag = self.open.get_mut(id)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Unknown ids read as closed.
    pub fn is_open(&self, id: usize) -> bool {
        self.open.get(id).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_start_closed() {
        let panels = DisclosurePanels::new(3);
        assert_eq!(panels.len(), 3);
        assert_eq!(panels.open_count(), 0);
        assert!((0..3).all(|i| !panels.is_open(i)));
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut panels = DisclosurePanels::new(2);
        assert_eq!(panels.toggle(1), Some(true));
        assert!(panels.is_open(1));
        assert_eq!(panels.toggle(1), Some(false));
        assert!(!panels.is_open(1));
    }

    #[test]
    fn toggling_one_panel_leaves_others_alone() {
        let mut panels = DisclosurePanels::new(4);
        panels.toggle(0);
        panels.toggle(2);
        panels.toggle(0);

        assert!(!panels.is_open(0));
        assert!(!panels.is_open(1));
        assert!(panels.is_open(2));
        assert!(!panels.is_open(3));
        assert_eq!(panels.open_count(), 1);
    }

    #[test]
    fn unknown_panel_is_noop() {
        let mut panels = DisclosurePanels::new(1);
        assert_eq!(panels.toggle(5), None);
        assert!(!panels.is_open(5));
        assert_eq!(panels, DisclosurePanels::new(1));
    }

    #[test]
    fn empty_panel_set() {
        let mut panels = DisclosurePanels::new(0);
        assert!(panels.is_empty());
        assert_eq!(panels.toggle(0), None);
    }
}
