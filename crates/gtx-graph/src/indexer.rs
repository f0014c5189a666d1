use std::collections::HashMap;
use std::hash::Hash;

use gtx_core::Indexer;

/// Hash-based [`Indexer`] assigning indices in first-seen order.
#[derive(Debug, Clone)]
pub struct HashIndexer<T> {
    indices: HashMap<T, usize>,
    items: Vec<T>,
}

impl<T: Eq + Hash + Clone> HashIndexer<T> {
    /// Creates an empty indexer.
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
            items: Vec::new(),
        }
    }

    /// Iterates over the indexed items in index order.
    pub fn items(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }
}

impl<T: Eq + Hash + Clone> Default for HashIndexer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Indexer<T> for HashIndexer<T> {
    fn index(&mut self, item: &T) -> usize {
        if let Some(&index) = self.indices.get(item) {
            return index;
        }
        let index = self.items.len();
        self.items.push(item.clone());
        self.indices.insert(item.clone(), index);
        index
    }

    fn find(&self, item: &T) -> Option<usize> {
        self.indices.get(item).copied()
    }

    fn lookup(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
