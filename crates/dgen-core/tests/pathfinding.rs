//! A* tunnels on an open grid: exact routes, connectivity and search state

use dgen_core::dungeon::{find_path, Coord, SearchGrid, SEGMENT_SUBDIVISIONS};
use dgen_core::GenerationError;
use proptest::prelude::*;

#[test]
fn test_three_cells_east() {
    let path = find_path(Coord::new(0, 0), Coord::new(3, 0), 5).unwrap();

    assert_eq!(path.cells().len(), 4);
    assert_eq!(path.steps(), 3);
    for pair in path.cells().windows(2) {
        assert_eq!(pair[0].chebyshev(pair[1]), 1);
    }
}

#[test]
fn test_tied_costs_follow_insertion_order() {
    // Several open cells share the lowest f on the way; the earliest inserted
    // one is expanded first, which fixes this exact route.
    let mut grid = SearchGrid::new(6, Coord::new(0, 0), Coord::new(4, 2)).unwrap();
    let path = grid.search().unwrap();

    assert_eq!(
        path.cells(),
        &[
            Coord::new(0, 0),
            Coord::new(1, 1),
            Coord::new(2, 1),
            Coord::new(3, 1),
            Coord::new(4, 2),
        ]
    );
    assert_eq!(path.stats().expanded, 8);
    assert_eq!(grid.closed_count(), 8);
}

#[test]
fn test_straight_route_expansions() {
    let path = find_path(Coord::new(0, 0), Coord::new(3, 0), 5).unwrap();
    assert_eq!(
        path.cells(),
        &[
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0),
        ]
    );
    assert_eq!(path.stats().expanded, 6);
}

#[test]
fn test_same_start_and_end() {
    let path = find_path(Coord::new(1, 1), Coord::new(1, 1), 5).unwrap();
    assert_eq!(path.cells(), &[Coord::new(1, 1)]);
    assert!(path.points().is_empty());
}

#[test]
fn test_path_across_full_grid() {
    let path = find_path(Coord::new(0, 0), Coord::new(39, 39), 40).unwrap();
    assert_eq!(path.start(), Coord::new(0, 0));
    assert_eq!(path.end(), Coord::new(39, 39));
    assert!(path.steps() >= 39);
    assert_eq!(path.points().len(), path.steps() * SEGMENT_SUBDIVISIONS);
}

#[test]
fn test_endpoints_must_be_inside_grid() {
    let err = find_path(Coord::new(0, 0), Coord::new(10, 10), 10).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidParameter { name: "end", .. }));
}

proptest! {
    #[test]
    fn paths_connect_any_two_cells(
        radius in 1i32..24,
        sx in 0i32..24, sz in 0i32..24, ex in 0i32..24, ez in 0i32..24,
    ) {
        let start = Coord::new(sx % radius, sz % radius);
        let end = Coord::new(ex % radius, ez % radius);

        let mut grid = SearchGrid::new(radius, start, end).unwrap();
        let path = grid.search().unwrap();

        prop_assert_eq!(path.start(), start);
        prop_assert_eq!(path.end(), end);
        prop_assert!(path.steps() >= start.chebyshev(end) as usize);
        for pair in path.cells().windows(2) {
            prop_assert_eq!(pair[0].chebyshev(pair[1]), 1);
        }
        prop_assert_eq!(grid.open_count(), 0);
        prop_assert_eq!(grid.closed_count(), path.stats().expanded);
    }
}
