//! Set algebra over ordered sets. Inputs are never mutated.

use std::collections::BTreeSet;

/// `a & b`
pub fn intersection<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.intersection(b).cloned().collect()
}

/// `a | b`
pub fn union<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.union(b).cloned().collect()
}

/// `a - b`
pub fn difference<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.difference(b).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[u8]) -> BTreeSet<u8> {
        items.iter().copied().collect()
    }

    #[test]
    fn intersection_keeps_shared() {
        assert_eq!(intersection(&set(&[1, 2, 3]), &set(&[2, 3, 4])), set(&[2, 3]));
        assert!(intersection(&set(&[1]), &set(&[2])).is_empty());
    }

    #[test]
    fn union_combines() {
        assert_eq!(union(&set(&[1, 2]), &set(&[2, 5])), set(&[1, 2, 5]));
        assert_eq!(union(&set(&[]), &set(&[7])), set(&[7]));
    }

    #[test]
    fn difference_removes_right_side() {
        assert_eq!(difference(&set(&[1, 2, 3]), &set(&[2])), set(&[1, 3]));
        assert_eq!(difference(&set(&[1]), &set(&[1, 9])), set(&[]));
    }

    #[test]
    fn inputs_untouched() {
        let a = set(&[1, 2]);
        let b = set(&[2, 3]);
        let _ = difference(&union(&a, &b), &intersection(&a, &b));
        assert_eq!(a, set(&[1, 2]));
        assert_eq!(b, set(&[2, 3]));
    }
}
