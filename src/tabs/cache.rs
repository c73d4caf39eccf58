use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Something the cache can find again by path
pub trait Keyed {
    fn key(&self) -> &Path;
}

/// Where a tab currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Visible(usize),
    Cached(usize),
}

/// Bounded set of materialized tabs plus a dormant overflow.
///
/// Both orderings are most-recently-shown first. At most `max_visible` tabs
/// are visible; opening or promoting past that demotes the back of the
/// visible ordering to the front of the cached one.
#[derive(Debug)]
pub struct TabCache<T> {
    visible: VecDeque<T>,
    cached: VecDeque<T>,
    max_visible: usize,
}

impl<T: Keyed> TabCache<T> {
    pub fn new(max_visible: usize) -> Self {
        TabCache {
            visible: VecDeque::new(),
            cached: VecDeque::new(),
            max_visible: max_visible.max(1),
        }
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn visible(&self) -> &VecDeque<T> {
        &self.visible
    }

    pub fn visible_mut(&mut self) -> &mut VecDeque<T> {
        &mut self.visible
    }

    pub fn cached(&self) -> &VecDeque<T> {
        &self.cached
    }

    pub fn cached_mut(&mut self) -> &mut VecDeque<T> {
        &mut self.cached
    }

    pub fn len(&self) -> usize {
        self.visible.len() + self.cached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.cached.is_empty()
    }

    pub fn find(&self, key: &Path) -> Option<Slot> {
        if let Some(i) = self.visible.iter().position(|t| t.key() == key) {
            return Some(Slot::Visible(i));
        }
        self.cached
            .iter()
            .position(|t| t.key() == key)
            .map(Slot::Cached)
    }

    pub fn contains(&self, key: &Path) -> bool {
        self.find(key).is_some()
    }

    pub fn get_mut(&mut self, key: &Path) -> Option<&mut T> {
        match self.find(key)? {
            Slot::Visible(i) => self.visible.get_mut(i),
            Slot::Cached(i) => self.cached.get_mut(i),
        }
    }

    /// Insert a newly opened tab at the front of the visible ordering.
    ///
    /// If a tab with the same key is already held it is promoted instead and
    /// `tab` is dropped. Returns the key of any tab demoted to make room.
    pub fn open(&mut self, tab: T) -> Option<PathBuf> {
        if self.contains(tab.key()) {
            let key = tab.key().to_path_buf();
            return self.promote(&key);
        }
        self.visible.push_front(tab);
        self.demote_overflow()
    }

    /// Move a tab to the front of the visible ordering, from either set.
    /// Returns the key of any tab demoted to make room.
    pub fn promote(&mut self, key: &Path) -> Option<PathBuf> {
        let tab = match self.find(key)? {
            Slot::Visible(i) => self.visible.remove(i)?,
            Slot::Cached(i) => self.cached.remove(i)?,
        };
        self.visible.push_front(tab);
        self.demote_overflow()
    }

    /// Drop a tab from the active set. When a visible tab goes and the cache
    /// is not empty, the front of the cache is promoted.
    pub fn close(&mut self, key: &Path) -> Option<T> {
        match self.find(key)? {
            Slot::Visible(i) => {
                let closed = self.visible.remove(i)?;
                if let Some(next) = self.cached.pop_front() {
                    self.visible.push_front(next);
                }
                Some(closed)
            }
            Slot::Cached(i) => self.cached.remove(i),
        }
    }

    /// Remove a tab whose list no longer exists. Never promotes.
    pub fn delete(&mut self, key: &Path) -> Option<T> {
        match self.find(key)? {
            Slot::Visible(i) => self.visible.remove(i),
            Slot::Cached(i) => self.cached.remove(i),
        }
    }

    /// Every key held, visible first
    pub fn keys(&self) -> Vec<PathBuf> {
        self.visible
            .iter()
            .chain(self.cached.iter())
            .map(|t| t.key().to_path_buf())
            .collect()
    }

    fn demote_overflow(&mut self) -> Option<PathBuf> {
        if self.visible.len() <= self.max_visible {
            return None;
        }
        let demoted = self.visible.pop_back()?;
        let key = demoted.key().to_path_buf();
        self.cached.push_front(demoted);
        Some(key)
    }
}
