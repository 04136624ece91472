//! Union-find over board locations, used while growing the spanning tree.
//!
//! Parent links are never compressed and unions are never balanced by rank or size: the root a
//! union picks depends only on argument order, and that choice feeds back into which edges later
//! `find` calls see as cycles. Seeded mazes stay reproducible only as long as this holds.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::GenerationError;
use crate::location::Location;

/// Minimal key requirements for a [`DisjointSet`].
pub(crate) trait Member: Copy + Eq + Hash {
    fn unregistered(self) -> GenerationError;
}

impl Member for Location {
    fn unregistered(self) -> GenerationError {
        GenerationError::UnregisteredCell(self)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet<T: Member> {
    parent: HashMap<T, T>,
}

impl<T: Member> DisjointSet<T> {
    /// A set in which every member of `members` is its own singleton component.
    pub(crate) fn new(members: impl IntoIterator<Item = T>) -> Self {
        Self {
            parent: members.into_iter().map(|m| (m, m)).collect(),
        }
    }

    /// Walk parent links from `member` until reaching a node mapped to itself.
    pub(crate) fn find(&self, member: T) -> Result<T, GenerationError> {
        let mut node = member;
        loop {
            let parent = *self.parent.get(&node).ok_or_else(|| node.unregistered())?;
            if parent == node {
                return Ok(node);
            }
            node = parent;
        }
    }

    /// Point the root of `a` at the root of `b`.
    pub(crate) fn union(&mut self, a: T, b: T) -> Result<(), GenerationError> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        self.parent.insert(root_a, root_b);
        Ok(())
    }

    pub(crate) fn same_component(&self, a: T, b: T) -> Result<bool, GenerationError> {
        Ok(self.find(a)? == self.find(b)?)
    }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;
    use crate::error::GenerationError;
    use crate::location::Location;

    #[test]
    fn fresh_members_are_their_own_roots() {
        let set = DisjointSet::new([Location(0, 0), Location(1, 0)]);
        assert_eq!(set.find(Location(0, 0)), Ok(Location(0, 0)));
        assert_eq!(set.find(Location(1, 0)), Ok(Location(1, 0)));
        assert_eq!(set.same_component(Location(0, 0), Location(1, 0)), Ok(false));
    }

    #[test]
    fn union_points_first_root_at_second() {
        let mut set = DisjointSet::new((0..3).map(|x| Location(x, 0)));
        set.union(Location(0, 0), Location(1, 0)).unwrap();
        assert_eq!(set.find(Location(0, 0)), Ok(Location(1, 0)));

        set.union(Location(2, 0), Location(0, 0)).unwrap();
        // the root of 0 is 1, so 2 hangs off 1
        assert_eq!(set.find(Location(2, 0)), Ok(Location(1, 0)));
        assert_eq!(set.same_component(Location(2, 0), Location(0, 0)), Ok(true));
    }

    #[test]
    fn chains_are_not_compressed() {
        let mut set = DisjointSet::new((0..4).map(|x| Location(x, 0)));
        set.union(Location(0, 0), Location(1, 0)).unwrap();
        set.union(Location(1, 0), Location(2, 0)).unwrap();
        set.union(Location(2, 0), Location(3, 0)).unwrap();

        assert_eq!(set.find(Location(0, 0)), Ok(Location(3, 0)));
        // find must not have rewritten intermediate links
        assert_eq!(set.parent.get(&Location(0, 0)), Some(&Location(1, 0)));
        assert_eq!(set.parent.get(&Location(1, 0)), Some(&Location(2, 0)));
    }

    #[test]
    fn unregistered_lookup_is_an_invariant_violation() {
        let mut set = DisjointSet::new([Location(0, 0)]);
        assert_eq!(set.find(Location(5, 5)), Err(GenerationError::UnregisteredCell(Location(5, 5))));
        assert!(set.union(Location(0, 0), Location(5, 5)).is_err());
    }
}
