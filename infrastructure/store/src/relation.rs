use std::collections::BTreeSet;

/// A many-to-many relation between two id spaces, indexed from both sides.
#[derive(Debug, Clone, Default)]
pub(crate) struct Relation {
    by_left: BTreeSet<(i64, i64)>,
    by_right: BTreeSet<(i64, i64)>,
}

impl Relation {
    pub fn contains(&self, left: i64, right: i64) -> bool {
        self.by_left.contains(&(left, right))
    }

    /// Returns false when the pair was already present.
    pub fn insert(&mut self, left: i64, right: i64) -> bool {
        self.by_right.insert((right, left));
        self.by_left.insert((left, right))
    }

    pub fn remove(&mut self, left: i64, right: i64) -> bool {
        self.by_right.remove(&(right, left));
        self.by_left.remove(&(left, right))
    }

    /// Rights paired with `left`, ascending.
    pub fn rights_of(&self, left: i64) -> impl Iterator<Item = i64> + '_ {
        self.by_left.range((left, i64::MIN)..=(left, i64::MAX)).map(|&(_, right)| right)
    }

    /// Lefts paired with `right`, ascending.
    pub fn lefts_of(&self, right: i64) -> impl Iterator<Item = i64> + '_ {
        self.by_right.range((right, i64::MIN)..=(right, i64::MAX)).map(|&(_, left)| left)
    }

    /// All pairs ordered by left, then right.
    pub fn pairs(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.by_left.iter().copied()
    }

    pub fn remove_left(&mut self, left: i64) -> usize {
        let rights: Vec<i64> = self.rights_of(left).collect();
        for right in &rights {
            self.remove(left, *right);
        }
        rights.len()
    }

    pub fn remove_right(&mut self, right: i64) -> usize {
        let lefts: Vec<i64> = self.lefts_of(right).collect();
        for left in &lefts {
            self.remove(*left, right);
        }
        lefts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_stay_in_sync() {
        let mut relation = Relation::default();
        assert!(relation.insert(1, 10));
        assert!(relation.insert(2, 10));
        assert!(relation.insert(1, 20));
        assert!(!relation.insert(1, 10));

        assert_eq!(vec![10, 20], relation.rights_of(1).collect::<Vec<_>>());
        assert_eq!(vec![1, 2], relation.lefts_of(10).collect::<Vec<_>>());

        assert_eq!(2, relation.remove_right(10));
        assert!(relation.lefts_of(10).next().is_none());
        assert_eq!(vec![20], relation.rights_of(1).collect::<Vec<_>>());

        assert_eq!(1, relation.remove_left(1));
        assert!(relation.pairs().next().is_none());
    }

    #[test]
    fn ranges_cover_extreme_ids() {
        let mut relation = Relation::default();
        relation.insert(i64::MAX, i64::MIN);
        relation.insert(i64::MAX, i64::MAX);
        assert_eq!(2, relation.rights_of(i64::MAX).count());
        assert!(relation.contains(i64::MAX, i64::MIN));
    }
}
