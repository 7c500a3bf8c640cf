//! Property-based tests for the search toolkit
//!
//! **Feature: search-toolkit**

use aoc_search::{
    Direction, Graph, Grid, Pos, TurnCosts, astar, count_segmentations, dijkstra, distance_map,
    min_turn_cost, quick_sort, shortest_path,
};
use proptest::prelude::*;

/// Random grid with a walk carved through it from the top-left corner
///
/// Returns the grid (`true` = open) and the end of the walk together with the
/// number of moves the walk took.
fn carved_grid(
    rows: usize,
    cols: usize,
    walls: &[bool],
    moves: &[u8],
) -> (Grid<bool>, Pos, usize) {
    let mut grid = Grid::from_fn(rows, cols, |pos| !walls[pos.row * cols + pos.col]);
    let mut pos = Pos::new(0, 0);
    let mut taken = 0;
    grid[pos] = true;
    for &m in moves {
        if let Some(next) = grid.step(pos, Direction::ALL[usize::from(m % 4)]) {
            pos = next;
            grid[pos] = true;
            taken += 1;
        }
    }
    (grid, pos, taken)
}

/// Outgoing `(target, weight)` lists for a random directed graph on `n` nodes
fn adjacency(n: usize, edges: &[(usize, usize, u64)]) -> Vec<Vec<(usize, u64)>> {
    let mut out = vec![Vec::new(); n];
    for &(from, to, weight) in edges {
        out[from % n].push((to % n, weight));
    }
    out
}

/// Forward move or a 90° turn, priced like `min_turn_cost` does it
fn turn_successors(
    grid: &Grid<bool>,
    (pos, dir): (Pos, Direction),
    costs: TurnCosts,
) -> Vec<((Pos, Direction), u64)> {
    let mut next = vec![
        ((pos, dir.turn_left()), costs.turn),
        ((pos, dir.turn_right()), costs.turn),
    ];
    if let Some(ahead) = grid.step(pos, dir).filter(|p| grid[*p]) {
        next.push(((ahead, dir), costs.step));
    }
    next
}

fn grid_strategy() -> impl Strategy<Value = (usize, usize, Vec<bool>, Vec<u8>)> {
    (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(prop::bool::weighted(0.35), rows * cols),
            prop::collection::vec(any::<u8>(), 0..40),
        )
    })
}

/// Count segmentations by trying every first piece
fn brute_force_segmentations(target: &str, vocabulary: &[String]) -> u64 {
    if target.is_empty() {
        return 1;
    }
    vocabulary
        .iter()
        .filter(|p| target.starts_with(p.as_str()))
        .map(|p| brute_force_segmentations(&target[p.len()..], vocabulary))
        .sum()
}

/// Size of the largest clique by checking every vertex subset
fn brute_force_clique_size(n: usize, adjacent: &dyn Fn(usize, usize) -> bool) -> usize {
    (0u32..1 << n)
        .filter(|mask| {
            (0..n).all(|a| {
                (a + 1..n).all(|b| mask & (1 << a) == 0 || mask & (1 << b) == 0 || adjacent(a, b))
            })
        })
        .map(|mask| mask.count_ones() as usize)
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: search-toolkit, Property 1: BFS never exceeds a known path**
    #[test]
    fn prop_bfs_bounded_by_explicit_walk((rows, cols, walls, moves) in grid_strategy()) {
        let (grid, end, walk_len) = carved_grid(rows, cols, &walls, &moves);
        let steps = shortest_path(&grid, Pos::new(0, 0), end, |open| *open).unwrap();
        prop_assert!(steps.is_some());
        prop_assert!(steps.unwrap() <= walk_len);
        prop_assert!(steps.unwrap() >= Pos::new(0, 0).manhattan(end));
    }

    /// **Feature: search-toolkit, Property 2: Distance map agrees with point queries**
    #[test]
    fn prop_distance_map_matches_shortest_path((rows, cols, walls, moves) in grid_strategy()) {
        let (grid, _, _) = carved_grid(rows, cols, &walls, &moves);
        let source = Pos::new(0, 0);
        let map = distance_map(&grid, source, |open| *open).unwrap();
        for (pos, open) in grid.iter() {
            let expected = if *open {
                shortest_path(&grid, source, pos, |open| *open).unwrap()
            } else {
                None
            };
            prop_assert_eq!(map.get(pos), expected);
        }
    }

    /// **Feature: search-toolkit, Property 3: Free turns reduce to BFS**
    #[test]
    fn prop_free_turns_match_bfs((rows, cols, walls, moves) in grid_strategy()) {
        let (grid, end, _) = carved_grid(rows, cols, &walls, &moves);
        let costs = TurnCosts { step: 1, turn: 0 };
        let weighted = min_turn_cost(&grid, Pos::new(0, 0), Direction::East, end, |open| *open, costs).unwrap();
        let steps = shortest_path(&grid, Pos::new(0, 0), end, |open| *open).unwrap();
        prop_assert_eq!(weighted, steps.map(|s| s as u64));
    }

    /// **Feature: search-toolkit, Property 4: Turn penalties never lower the cost**
    #[test]
    fn prop_turn_cost_at_least_step_count((rows, cols, walls, moves) in grid_strategy()) {
        let (grid, end, _) = carved_grid(rows, cols, &walls, &moves);
        let cost = min_turn_cost(&grid, Pos::new(0, 0), Direction::East, end, |open| *open, TurnCosts::default())
            .unwrap()
            .unwrap();
        let steps = shortest_path(&grid, Pos::new(0, 0), end, |open| *open).unwrap().unwrap();
        prop_assert!(cost >= steps as u64);
    }

    /// **Feature: search-toolkit, Property 5: Segmentation DP matches brute force**
    #[test]
    fn prop_segmentations_match_brute_force(
        vocabulary in prop::collection::hash_set("[ab]{1,3}", 1..6),
        target in "[ab]{0,12}",
    ) {
        let vocabulary: Vec<String> = vocabulary.into_iter().collect();
        let counted = count_segmentations(&target, vocabulary.iter().cloned()).unwrap();
        prop_assert_eq!(counted, brute_force_segmentations(&target, &vocabulary));
    }

    /// **Feature: search-toolkit, Property 6: Maximum clique is a clique of maximum size**
    #[test]
    fn prop_max_clique_is_maximum(n in 1usize..9, bits in prop::collection::vec(any::<bool>(), 36)) {
        let adjacent = |a: usize, b: usize| {
            let (lo, hi) = (a.min(b), a.max(b));
            // packed triangular index of the pair
            bits[hi * (hi - 1) / 2 + lo]
        };
        let edges = (0..n)
            .flat_map(|a| (a..n).map(move |b| (a, b)))
            .filter(|&(a, b)| a == b || adjacent(a, b));
        let graph = Graph::from_edges(edges);

        let clique = graph.max_clique();
        for (i, a) in clique.iter().enumerate() {
            for b in &clique[i + 1..] {
                prop_assert!(graph.contains_edge(a, b));
            }
        }
        prop_assert_eq!(clique.len(), brute_force_clique_size(n, &adjacent));
        prop_assert_eq!(graph.max_clique(), clique);
    }

    /// **Feature: search-toolkit, Property 7: Partition sort agrees with the standard sort**
    #[test]
    fn prop_quick_sort_matches_std(items in prop::collection::vec(-1000i64..1000, 0..200)) {
        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(quick_sort(&items), expected);
    }

    /// **Feature: search-toolkit, Property 8: A* with an admissible heuristic is optimal**
    ///
    /// The heuristic is a random fraction of the true remaining cost, so it
    /// never overestimates but is usually inconsistent.
    #[test]
    fn prop_astar_matches_dijkstra(
        n in 2usize..9,
        edges in prop::collection::vec((0usize..9, 0usize..9, 0u64..20), 0..30),
        fractions in prop::collection::vec(0u64..=100, 9),
    ) {
        let out = adjacency(n, &edges);
        let goal = n - 1;
        let remaining: Vec<Option<u64>> = (0..n)
            .map(|v| dijkstra(v, |u| out[*u].clone(), |u| *u == goal).map(|(_, c)| c))
            .collect();
        // Nodes that cannot reach the goal may be estimated at anything
        let heuristic = |v: &usize| remaining[*v].map_or(1_000, |c| c * fractions[*v] / 100);

        let with_heuristic = astar(0, |u| out[*u].clone(), heuristic, |u| *u == goal);
        let without = dijkstra(0, |u| out[*u].clone(), |u| *u == goal);
        prop_assert_eq!(with_heuristic.map(|(_, c)| c), without.map(|(_, c)| c));
        prop_assert_eq!(with_heuristic.map(|(_, c)| c), remaining[0]);
    }

    /// **Feature: search-toolkit, Property 9: Turn-penalised search matches plain Dijkstra**
    #[test]
    fn prop_turn_cost_matches_dijkstra((rows, cols, walls, moves) in grid_strategy(), facing in 0usize..4) {
        let (grid, end, _) = carved_grid(rows, cols, &walls, &moves);
        let facing = Direction::ALL[facing];
        let costs = TurnCosts::default();

        let searched = min_turn_cost(&grid, Pos::new(0, 0), facing, end, |open| *open, costs).unwrap();
        let reference = dijkstra(
            (Pos::new(0, 0), facing),
            |state| turn_successors(&grid, *state, costs),
            |(pos, _)| *pos == end,
        );
        prop_assert_eq!(searched, reference.map(|(_, c)| c));
    }
}
