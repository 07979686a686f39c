use crate::mapping::NodeMapping;
use crate::Symbol;

/// A keyed mapping holding children in a vector sorted by their dispatch symbol.
///
/// Alphabets are open-ended (`char` has far more than 256 values) so there is no fixed-width
/// variant; lookups are a binary search over the keys.
pub struct KeyedMapping<S, N> {
    keys: Vec<S>,
    children: Vec<N>,
}

impl<S: Symbol, N> Default for KeyedMapping<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, N> KeyedMapping<S, N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    fn find_key_position(&self, key: &S) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }

    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&S, &N)> {
        self.keys.iter().zip(self.children.iter())
    }

    /// Removes every child, handing them back in key order.
    pub fn drain(&mut self) -> impl Iterator<Item = N> + '_ {
        self.keys.clear();
        self.children.drain(..)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the child filed under `key`, adding the one built by `make` if there is none.
    pub fn seek_or_add_child(&mut self, key: &S, make: impl FnOnce() -> N) -> &mut N {
        let idx = match self.find_key_position(key) {
            Ok(idx) => idx,
            Err(idx) => {
                self.keys.insert(idx, key.clone());
                self.children.insert(idx, make());
                idx
            }
        };
        &mut self.children[idx]
    }
}

impl<S: Symbol, N> NodeMapping<S, N> for KeyedMapping<S, N> {
    #[inline]
    fn add_child(&mut self, key: S, node: N) {
        match self.find_key_position(&key) {
            Ok(idx) => {
                // Siblings never share a leading symbol; keep the newest if they somehow do.
                debug_assert!(false, "add_child: duplicate key {:?}", key);
                self.children[idx] = node;
            }
            Err(idx) => {
                self.keys.insert(idx, key);
                self.children.insert(idx, node);
            }
        }
    }

    fn seek_child(&self, key: &S) -> Option<&N> {
        let idx = self.find_key_position(key).ok()?;
        Some(&self.children[idx])
    }

    fn seek_child_mut(&mut self, key: &S) -> Option<&mut N> {
        let idx = self.find_key_position(key).ok()?;
        Some(&mut self.children[idx])
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::mapping::keyed_mapping::KeyedMapping;
    use crate::mapping::NodeMapping;

    #[test]
    fn test_add_seek() {
        let mut node = KeyedMapping::<u8, u8>::new();
        node.add_child(3, 3);
        node.add_child(1, 1);
        node.add_child(4, 4);
        node.add_child(2, 2);
        assert_eq!(node.num_children(), 4);
        assert_eq!(node.seek_child(&1), Some(&1));
        assert_eq!(node.seek_child(&2), Some(&2));
        assert_eq!(node.seek_child(&3), Some(&3));
        assert_eq!(node.seek_child(&4), Some(&4));
        assert_eq!(node.seek_child(&5), None);
        assert_eq!(node.seek_child_mut(&1).copied(), Some(1));
        assert_eq!(node.seek_child_mut(&5), None);
        *node.seek_child_mut(&2).unwrap() = 20;
        assert_eq!(node.seek_child(&2), Some(&20));
        assert_eq!(node.num_children(), 4);
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut node = KeyedMapping::<char, usize>::new();
        for (i, c) in "zebra".chars().enumerate() {
            node.add_child(c, i);
        }
        let keys: Vec<char> = node.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!['a', 'b', 'e', 'r', 'z']);
        assert!(!node.is_empty());
        assert!(KeyedMapping::<char, usize>::new().is_empty());
    }

    #[test]
    fn test_drain() {
        let mut node = KeyedMapping::<u8, u8>::new();
        node.add_child(2, 20);
        node.add_child(1, 10);
        let drained: Vec<u8> = node.drain().collect();
        assert_eq!(drained, vec![10, 20]);
        assert!(node.is_empty());
        assert_eq!(node.seek_child(&1), None);
    }

    #[test]
    fn test_seek_or_add() {
        let mut node = KeyedMapping::<char, u32>::new();
        *node.seek_or_add_child(&'b', || 0) += 1;
        *node.seek_or_add_child(&'a', || 10) += 1;
        *node.seek_or_add_child(&'b', || 0) += 1;
        assert_eq!(node.num_children(), 2);
        assert_eq!(node.seek_child(&'a'), Some(&11));
        assert_eq!(node.seek_child(&'b'), Some(&2));
    }
}
