//! Weighted state-space search (Dijkstra / A*)
//!
//! The frontier is a min-heap keyed by `cost + heuristic`. A best-cost map
//! rejects dominated frontier entries when they are popped (lazy deletion). A
//! state popped again at a lower cost is expanded again, so an admissible but
//! inconsistent heuristic still yields the optimal cost. The search stops the
//! first time a goal state is popped.
//!
//! Ties between equal-priority states are broken arbitrarily.

use crate::error::SearchError;
use crate::grid::{Direction, Grid, Pos};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Frontier entry, ordered so the `BinaryHeap` pops the lowest priority first
struct Frontier<S> {
    priority: u64,
    cost: u64,
    state: S,
}

impl<S> Ord for Frontier<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (smallest first)
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

impl<S> PartialOrd for Frontier<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Eq for Frontier<S> {}

impl<S> PartialEq for Frontier<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

/// A* search from `start` to the first state satisfying `is_goal`
///
/// `successors` yields `(next_state, edge_cost)` pairs. `heuristic` must never
/// overestimate the remaining cost to a goal, otherwise the returned cost may
/// not be minimal.
///
/// # Returns
/// * `Some((goal_state, cost))` - The cheapest goal reached
/// * `None` - No goal state is reachable
///
/// # Example
///
/// ```
/// use aoc_search::astar;
///
/// // Walk the number line from 0 to 10 with steps of +1 (cost 1) or +3 (cost 2)
/// let found = astar(
///     0u32,
///     |&n| [(n + 1, 1), (n + 3, 2)].into_iter().filter(|(m, _)| *m <= 10),
///     |&n| u64::from(10 - n) / 3,
///     |&n| n == 10,
/// );
/// assert_eq!(found, Some((10, 7)));
/// ```
pub fn astar<S, I, FS, FH, FG>(
    start: S,
    mut successors: FS,
    mut heuristic: FH,
    mut is_goal: FG,
) -> Option<(S, u64)>
where
    S: Clone + Eq + Hash,
    FS: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, u64)>,
    FH: FnMut(&S) -> u64,
    FG: FnMut(&S) -> bool,
{
    let mut best: HashMap<S, u64> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best.insert(start.clone(), 0);
    frontier.push(Frontier {
        priority: heuristic(&start),
        cost: 0,
        state: start,
    });

    while let Some(Frontier { cost, state, .. }) = frontier.pop() {
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }
        if is_goal(&state) {
            return Some((state, cost));
        }

        for (next, edge_cost) in successors(&state) {
            let next_cost = cost.saturating_add(edge_cost);
            match best.entry(next.clone()) {
                Entry::Occupied(mut known) if next_cost < *known.get() => {
                    known.insert(next_cost);
                }
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(next_cost);
                }
            }
            frontier.push(Frontier {
                priority: next_cost.saturating_add(heuristic(&next)),
                cost: next_cost,
                state: next,
            });
        }
    }

    None
}

/// Dijkstra's algorithm: [`astar`] without a heuristic
pub fn dijkstra<S, I, FS, FG>(start: S, successors: FS, is_goal: FG) -> Option<(S, u64)>
where
    S: Clone + Eq + Hash,
    FS: FnMut(&S) -> I,
    I: IntoIterator<Item = (S, u64)>,
    FG: FnMut(&S) -> bool,
{
    astar(start, successors, |_| 0, is_goal)
}

/// Costs for the turn-penalised grid walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCosts {
    /// Cost of moving one cell forward
    pub step: u64,
    /// Cost of rotating 90° in place
    pub turn: u64,
}

impl Default for TurnCosts {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

/// Cheapest walk from `start` (initially facing `facing`) to `end`
///
/// The walker either moves one cell forward onto a passable cell or rotates
/// 90° left or right in place. The search runs over `(Pos, Direction)` states
/// with a Manhattan-distance heuristic scaled by the step cost.
///
/// # Returns
/// * `Ok(Some(cost))` - Minimum total cost, in any final orientation
/// * `Ok(None)` - `end` cannot be reached
/// * `Err(SearchError::InvalidInput)` - An endpoint is off the grid or blocked
pub fn min_turn_cost<T, F>(
    grid: &Grid<T>,
    start: Pos,
    facing: Direction,
    end: Pos,
    passable: F,
    costs: TurnCosts,
) -> Result<Option<u64>, SearchError>
where
    F: Fn(&T) -> bool,
{
    grid.require_passable(start, &passable, "start")?;
    grid.require_passable(end, &passable, "end")?;

    let found = astar(
        (start, facing),
        |&(pos, dir)| {
            let forward = grid
                .step(pos, dir)
                .filter(|next| passable(&grid[*next]))
                .map(|next| ((next, dir), costs.step));
            forward.into_iter().chain([
                ((pos, dir.turn_left()), costs.turn),
                ((pos, dir.turn_right()), costs.turn),
            ])
        },
        |&(pos, _)| costs.step.saturating_mul(pos.manhattan(end) as u64),
        |&(pos, _)| pos == end,
    );

    Ok(found.map(|(_, cost)| cost))
}
