//! Operations on collections of ranges.

use crate::range::{Range, order};

/// Merges overlapping and touching ranges into a sorted list of disjoint
/// ranges.
///
/// ```
/// use tempora_interval::{Range, coalesce};
///
/// let merged = coalesce(&[
///     Range::new(5, 8).unwrap(),
///     Range::new(1, 3).unwrap(),
///     Range::new(3, 4).unwrap(),
/// ]);
/// assert_eq!(merged, vec![Range::new(1, 4).unwrap(), Range::new(5, 8).unwrap()]);
/// ```
pub fn coalesce<T: PartialOrd + Clone>(ranges: &[Range<T>]) -> Vec<Range<T>> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| order(&a.lower, &b.lower));
    let mut merged: Vec<Range<T>> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.lower <= last.upper => {
                if range.upper > last.upper {
                    last.upper = range.upper;
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Returns the parts of `outer` not covered by any of `ranges`, sorted.
pub fn complement_within<T: PartialOrd + Clone>(
    outer: &Range<T>,
    ranges: &[Range<T>],
) -> Vec<Range<T>> {
    let mut gaps = Vec::new();
    let mut cursor = outer.lower.clone();
    for range in coalesce(ranges) {
        let Some(clipped) = range.intersection(outer) else {
            continue;
        };
        if cursor < clipped.lower {
            gaps.push(Range::from_ordered(cursor, clipped.lower));
        }
        cursor = clipped.upper;
    }
    if cursor < outer.upper {
        gaps.push(Range::from_ordered(cursor, outer.upper.clone()));
    }
    gaps
}

/// Returns the points covered by both collections, as sorted disjoint
/// ranges.
pub fn intersect_all<T: PartialOrd + Clone>(a: &[Range<T>], b: &[Range<T>]) -> Vec<Range<T>> {
    let a = coalesce(a);
    let b = coalesce(b);
    let (mut i, mut j) = (0, 0);
    let mut out = Vec::new();
    while i < a.len() && j < b.len() {
        if let Some(common) = a[i].intersection(&b[j]) {
            out.push(common);
        }
        if a[i].upper < b[j].upper {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(lower: i32, upper: i32) -> Range<i32> {
        Range::new(lower, upper).unwrap()
    }

    #[test]
    fn coalesce_empty() {
        assert!(coalesce::<i32>(&[]).is_empty());
    }

    #[test]
    fn coalesce_merges_overlapping_and_nested() {
        let merged = coalesce(&[r(4, 6), r(1, 5), r(2, 3), r(8, 9)]);
        assert_eq!(merged, vec![r(1, 6), r(8, 9)]);
    }

    #[test]
    fn complement_of_windows() {
        let outer = r(0, 100);
        let gaps = complement_within(&outer, &[r(10, 30), r(60, 85)]);
        assert_eq!(gaps, vec![r(0, 10), r(30, 60), r(85, 100)]);
    }

    #[test]
    fn complement_clips_to_outer() {
        let outer = r(10, 20);
        assert_eq!(complement_within(&outer, &[r(0, 12), r(18, 40)]), vec![r(12, 18)]);
        assert!(complement_within(&outer, &[r(0, 40)]).is_empty());
        assert_eq!(complement_within(&outer, &[r(30, 40)]), vec![outer]);
        assert_eq!(complement_within(&outer, &[]), vec![outer]);
    }

    #[test]
    fn intersect_collections() {
        let a = [r(10, 30), r(60, 85)];
        let b = [r(0, 20), r(70, 100)];
        assert_eq!(intersect_all(&a, &b), vec![r(10, 20), r(70, 85)]);
        assert!(intersect_all(&a, &[r(30, 60)]).is_empty());
    }
}
