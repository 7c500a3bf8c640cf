//! Small helpers shared by several solvers

use std::collections::HashSet;
use std::hash::Hash;

/// Sort by recursive partitioning around the middle element
///
/// Elements smaller than the pivot go left, everything else goes right. The
/// input is left untouched and equal elements may be reordered.
///
/// # Example
///
/// ```
/// use aoc_search::quick_sort;
///
/// assert_eq!(quick_sort(&[3, 4, 2, 1, 3, 3]), vec![1, 2, 3, 3, 3, 4]);
/// ```
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let pivot = &items[mid];
    let (left, right): (Vec<T>, Vec<T>) = items
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != mid)
        .map(|(_, item)| item.clone())
        .partition(|item| item < pivot);

    let mut sorted = quick_sort(&left);
    sorted.push(pivot.clone());
    sorted.extend(quick_sort(&right));
    sorted
}

/// Greatest common divisor, always non-negative
///
/// `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Every node reachable from `start`, in depth-first visiting order
///
/// `neighbors` is queried once per visited node; `start` comes first.
pub fn depth_first_search<N, F, I>(start: N, mut neighbors: F) -> Vec<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        stack.extend(neighbors(&node).into_iter().filter(|n| !visited.contains(n)));
        order.push(node);
    }

    order
}
