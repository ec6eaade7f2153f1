//! Insertion-ordered map keyed by pool address

use alloy::primitives::Address;

/// Map from pool address to `T` that iterates in insertion order.
///
/// Candidate order is fixed by the fee tier order, and tie-breaks in rate
/// selection depend on it, so iteration must never depend on hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolMap<T> {
    entries: Vec<(Address, T)>,
}

impl<T> PoolMap<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, address: Address, value: T) -> Option<T> {
        match self.entries.iter_mut().find(|(key, _)| *key == address) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((address, value));
                None
            }
        }
    }

    pub fn get(&self, address: &Address) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == address)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.get(address).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, &T)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<T> Default for PoolMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Address, T)> for PoolMap<T> {
    fn from_iter<I: IntoIterator<Item = (Address, T)>>(iter: I) -> Self {
        let mut map = PoolMap::new();
        for (address, value) in iter {
            map.insert(address, value);
        }
        map
    }
}

impl<T> IntoIterator for PoolMap<T> {
    type Item = (Address, T);
    type IntoIter = std::vec::IntoIter<(Address, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let a = Address::repeat_byte(0xaa);
        let b = Address::repeat_byte(0x0b);
        let c = Address::repeat_byte(0x5c);

        let map: PoolMap<u32> = [(a, 1), (b, 2), (c, 3)].into_iter().collect();
        let keys: Vec<Address> = map.addresses().copied().collect();
        assert_eq!(keys, vec![a, b, c]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let a = Address::repeat_byte(1);
        let b = Address::repeat_byte(2);

        let mut map = PoolMap::new();
        map.insert(a, 10);
        map.insert(b, 20);
        assert_eq!(map.insert(a, 30), Some(10));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&a), Some(&30));
        assert_eq!(map.iter().next(), Some((&a, &30)));
    }
}
