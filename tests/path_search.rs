//! Integration tests exercising the public search API end to end

use std::collections::HashSet;
use waypath::error::WaypathError;
use waypath::search::{find_path, FnSpace, SearchOptions, SearchSpace};

/// A rectangular grid with blocked cells; moves are the four
/// axis-aligned neighbors, the metric is Manhattan distance.
struct GridSpace {
    width: i32,
    height: i32,
    walls: HashSet<(i32, i32)>,
}

impl GridSpace {
    fn open(&self, cell: &(i32, i32)) -> bool {
        let (x, y) = *cell;
        x >= 0 && x < self.width && y >= 0 && y < self.height && !self.walls.contains(cell)
    }
}

impl SearchSpace<(i32, i32)> for GridSpace {
    fn moves(&self, from: &(i32, i32)) -> HashSet<(i32, i32)> {
        let (x, y) = *from;
        [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .filter(|cell| self.open(cell))
            .collect()
    }

    fn cost(&self, goal: &(i32, i32), candidate: &(i32, i32)) -> f64 {
        ((goal.0 - candidate.0).abs() + (goal.1 - candidate.1).abs()) as f64
    }
}

#[test]
fn grid_path_detours_around_walls() {
    // a wall down x = 2 with a single gap at y = 4
    let space = GridSpace {
        width: 5,
        height: 5,
        walls: HashSet::from([(2, 0), (2, 1), (2, 2), (2, 3)]),
    };

    let result = find_path(&space, &SearchOptions::default(), &(0, 0), &(4, 0)).unwrap();

    // up to the gap and back down: 12 hops, against 4 on an open grid
    assert_eq!(result.path_length, 12);
    assert_eq!(result.path.last(), Some(&(4, 0)));
    assert!(result.path.contains(&(2, 4)));
    assert!(result.path.iter().all(|cell| space.open(cell)));
}

#[test]
fn grid_path_steps_are_adjacent() {
    let space = GridSpace {
        width: 4,
        height: 4,
        walls: HashSet::new(),
    };

    let start = (0, 3);
    let result = find_path(&space, &SearchOptions::default(), &start, &(3, 0)).unwrap();

    let mut previous = start;
    for cell in &result.path {
        let stride = (cell.0 - previous.0).abs() + (cell.1 - previous.1).abs();
        assert_eq!(stride, 1, "non-adjacent step {previous:?} -> {cell:?}");
        previous = *cell;
    }
    assert_eq!(result.path_length, 6);
}

#[test]
fn walled_off_goal_reports_path_not_found() {
    let space = GridSpace {
        width: 5,
        height: 5,
        walls: HashSet::from([(3, 3), (3, 4), (4, 3)]),
    };

    let err = find_path(&space, &SearchOptions::default(), &(0, 0), &(4, 4)).unwrap_err();
    assert_eq!(err, WaypathError::PathNotFound);
}

#[test]
fn closure_space_finds_same_path_as_struct_space() {
    let grid = GridSpace {
        width: 5,
        height: 5,
        walls: HashSet::new(),
    };
    let closures = FnSpace::new(
        |goal: &(i32, i32), candidate: &(i32, i32)| {
            ((goal.0 - candidate.0).abs() + (goal.1 - candidate.1).abs()) as f64
        },
        |from: &(i32, i32)| {
            let (x, y) = *from;
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .into_iter()
                .filter(|&(x, y)| x >= 0 && x < 5 && y >= 0 && y < 5)
                .collect()
        },
    );

    let from_struct = find_path(&grid, &SearchOptions::default(), &(0, 0), &(4, 4)).unwrap();
    let from_closures = find_path(&closures, &SearchOptions::default(), &(0, 0), &(4, 4)).unwrap();

    assert_eq!(from_struct.path, from_closures.path);
    assert_eq!(from_struct.path_length, 8);
}

#[test]
fn bounded_search_abandons_unbounded_space() {
    let space = FnSpace::new(
        |goal: &i64, candidate: &i64| (goal - candidate).abs() as f64,
        |from: &i64| HashSet::from([from + 1, from + 2]),
    );
    let opts = SearchOptions {
        max_iterations: Some(100),
        ..Default::default()
    };

    // the goal sits behind the start and is never generated
    let err = find_path(&space, &opts, &0, &-10).unwrap_err();
    assert_eq!(err, WaypathError::IterationLimitExceeded { limit: 100 });
}

#[test]
fn path_result_serializes_to_documented_shape() {
    let space = GridSpace {
        width: 3,
        height: 1,
        walls: HashSet::new(),
    };

    let result = find_path(&space, &SearchOptions::default(), &(0, 0), &(2, 0)).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["path_length"], 2);
    assert_eq!(json["path"], serde_json::json!([[1, 0], [2, 0]]));
    assert_eq!(json["start"], serde_json::json!([0, 0]));
    assert_eq!(json["goal"], serde_json::json!([2, 0]));
    assert!(json["expanded"].as_u64().is_some());
}

#[test]
fn init_tracing_succeeds_once() {
    assert!(waypath::logging::init_tracing(true, None, false).is_ok());
}
