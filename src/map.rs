use crate::Boxwood;

struct MapEntry<K: Ord, V> {
    key: K,
    value: Option<V>,
}

impl<K: Ord, V> PartialEq for MapEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord, V> Eq for MapEntry<K, V> {}

impl<K: Ord, V> PartialOrd for MapEntry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<K: Ord, V> Ord for MapEntry<K, V> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// An associative array, storing key-value pairs.
///
/// Uses a Boxwood AVL tree with a specialized entry type ordered by key
/// only. Keys are unique; inserting an existing key keeps the first value.
pub struct BoxwoodMap<K: Ord, V> {
    tree: Boxwood<MapEntry<K, V>>,
}

impl<K: Ord, V> BoxwoodMap<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Boxwood::new(),
        }
    }

    pub fn contains_key(&self, key: K) -> bool {
        self.tree.contains(&MapEntry { key, value: None })
    }

    pub fn insert(&mut self, key: K, value: V) -> bool {
        let before = self.tree.len();

        self.tree.insert(MapEntry {
            key,
            value: Some(value),
        }) != before
    }

    pub fn remove(&mut self, key: K) -> bool {
        self.tree.remove(&MapEntry { key, value: None })
    }

    pub fn get(&self, key: K) -> Option<&V> {
        self.tree
            .find(&MapEntry { key, value: None })?
            .value
            .as_ref()
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.tree
            .find_mut(&MapEntry { key, value: None })?
            .value
            .as_mut()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }
}

impl<K: Ord, V> Default for BoxwoodMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
