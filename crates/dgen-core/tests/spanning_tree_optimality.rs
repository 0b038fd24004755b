//! Prim's tree against every spanning tree of small room graphs

use dgen_core::dungeon::{place_rooms, Coord, DistanceGraph, SpanningTree};
use dgen_core::{DungeonConfig, SeededSource};
use proptest::prelude::*;

fn find(root: &mut [usize], mut v: usize) -> usize {
    while root[v] != v {
        root[v] = root[root[v]];
        v = root[v];
    }
    v
}

/// Cheapest spanning tree weight by trying every (V-1)-edge subset
fn brute_force_minimum(graph: &DistanceGraph) -> i64 {
    let n = graph.len();
    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
        .collect();

    let mut best = i64::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }

        // Union-find over the chosen edges; a cycle means not a tree
        let mut root: Vec<usize> = (0..n).collect();

        let mut weight = 0i64;
        let mut is_tree = true;
        for (bit, &(a, b)) in edges.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            let (ra, rb) = (find(&mut root, a), find(&mut root, b));
            if ra == rb {
                is_tree = false;
                break;
            }
            root[ra] = rb;
            weight += i64::from(graph.weight(a, b));
        }

        if is_tree {
            best = best.min(weight);
        }
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prim_matches_brute_force(rooms in 4usize..=5, seed in any::<u64>()) {
        let config = DungeonConfig::for_room_count(rooms);
        let anchors = place_rooms(&config, &mut SeededSource::new(seed)).unwrap();
        let graph = DistanceGraph::from_rooms(&anchors);
        let tree = SpanningTree::prim(&graph);

        prop_assert!(tree.is_spanning());
        prop_assert_eq!(tree.total_weight(&graph), brute_force_minimum(&graph));
    }
}

#[test]
fn prim_on_a_known_layout() {
    // A plus shape: the centre joins all four arms
    let anchors = vec![
        Coord::new(10, 10),
        Coord::new(10, 14),
        Coord::new(14, 10),
        Coord::new(10, 6),
        Coord::new(6, 10),
    ];
    let graph = DistanceGraph::from_rooms(&anchors);
    let tree = SpanningTree::prim(&graph);

    assert_eq!(
        tree.parents(),
        &[None, Some(0), Some(0), Some(0), Some(0)]
    );
    assert_eq!(tree.total_weight(&graph), 16);
    assert_eq!(brute_force_minimum(&graph), 16);
}
