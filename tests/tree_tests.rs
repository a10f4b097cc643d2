use polyfract::{
    errors::ValidationError,
    polygon::Point,
    tree::PolyTree,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod support;

use crate::support::{make_polygon, unit_square};

/// Every occurrence of every point, over buffers of the whole subtree.
fn collect_points(tree: &PolyTree, into: &mut Vec<Point>) {
    into.extend_from_slice(tree.buffered());
    if let Some((left, right)) = tree.children() {
        collect_points(left, into);
        collect_points(right, into);
    }
}

fn occurrences(tree: &PolyTree, point: &Point) -> usize {
    let mut all = Vec::new();
    collect_points(tree, &mut all);
    all.iter().filter(|p| *p == point).count()
}

#[test]
fn zero_capacity_is_invalid() {
    let result = PolyTree::new(unit_square(), 0);
    assert_eq!(result.unwrap_err(), ValidationError::InvalidCapacity(0));
}

#[test]
fn positive_capacity_is_accepted() {
    let tree = PolyTree::new(unit_square(), 1).unwrap();
    assert_eq!(tree.capacity(), 1);
    assert!(!tree.is_divided());
    assert!(tree.is_empty());
}

#[test]
fn outside_point_is_rejected_without_side_effects() {
    let mut tree = PolyTree::new(unit_square(), 3).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    assert!(!tree.insert(Point::new(500.0, 500.0), &mut rng));
    assert!(tree.is_empty());
    assert!(!tree.is_divided());

    // also when full: an outside point must not trigger a division
    for p in [
        Point::new(20.0, 30.0),
        Point::new(70.0, 40.0),
        Point::new(40.0, 80.0),
    ] {
        assert!(tree.insert(p, &mut rng));
    }
    assert_eq!(tree.len(), 3);
    assert!(!tree.insert(Point::new(500.0, 500.0), &mut rng));
    assert!(!tree.is_divided());
    assert_eq!(tree.len(), 3);
}

#[test]
fn overflowing_insert_divides_and_redistributes_exactly_once_each() {
    let mut tree = PolyTree::new(unit_square(), 3).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let points = [
        Point::new(20.0, 30.0),
        Point::new(70.0, 40.0),
        Point::new(40.0, 80.0),
        Point::new(60.0, 20.0),
    ];
    for p in points {
        assert!(tree.insert(p, &mut rng));
    }

    assert!(tree.is_divided());
    assert!(tree.is_empty(), "a divided node keeps no buffer");
    let (left, right) = tree.children().unwrap();
    for p in &points {
        let hits = occurrences(left, p) + occurrences(right, p);
        assert_eq!(hits, 1, "point {p} duplicated or lost");
    }
    let mut all = Vec::new();
    collect_points(&tree, &mut all);
    assert_eq!(all.len(), points.len());
}

#[test]
fn children_partition_the_parent_bounds() {
    let mut tree = PolyTree::new(unit_square(), 2).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    for p in [
        Point::new(25.0, 25.0),
        Point::new(75.0, 75.0),
        Point::new(50.0, 40.0),
    ] {
        assert!(tree.insert(p, &mut rng));
    }
    assert!(tree.is_divided());
    let (left, right) = tree.children().unwrap();
    // children inherit the parent's colors and capacity
    assert_eq!(left.bounds().fill, tree.bounds().fill);
    assert_eq!(right.bounds().stroke, tree.bounds().stroke);
    assert_eq!(left.capacity(), tree.capacity());
    // interior samples land in exactly one half
    let mut rng2 = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let q = Point::new(rng2.gen_range(1.0..99.0), rng2.gen_range(1.0..99.0));
        let sides =
            usize::from(left.bounds().contains(&q)) + usize::from(right.bounds().contains(&q));
        assert_eq!(sides, 1, "sample {q} not in exactly one child");
    }
}

#[test]
fn same_seed_builds_identical_trees() {
    let build = || {
        let mut rng = StdRng::seed_from_u64(0x00C0_FFEE);
        let mut tree = PolyTree::new(unit_square(), 2).unwrap();
        for _ in 0..200 {
            let p = Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
            tree.insert(p, &mut rng);
        }
        tree
    };
    assert_eq!(build(), build());
}

#[test]
fn triangle_with_capacity_one_routes_followup_points_to_children() {
    let triangle = make_polygon(&[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0]]);
    let mut tree = PolyTree::new(triangle, 1).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    // first insert fills the buffer to capacity
    assert!(tree.insert(Point::new(1.0, 1.0), &mut rng));
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_divided());

    // second insert forces a division through the centroid (1, 1)
    assert!(tree.insert(Point::new(5.0, 5.0), &mut rng));
    assert!(tree.is_divided());

    assert!(tree.insert(Point::new(8.0, 2.0), &mut rng));

    for p in [
        Point::new(1.0, 1.0),
        Point::new(5.0, 5.0),
        Point::new(8.0, 2.0),
    ] {
        assert_eq!(occurrences(&tree, &p), 1, "point {p} duplicated or lost");
    }
}

#[test]
fn deep_division_keeps_every_point() {
    let mut tree = PolyTree::new(unit_square(), 1).unwrap();
    let mut rng = StdRng::seed_from_u64(0xDBD4_65D1);
    let mut kept = Vec::new();
    for _ in 0..64 {
        let p = Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0));
        if tree.insert(p, &mut rng) {
            kept.push(p);
        }
    }
    // dropped points are legal (failed divisions, cut-line ties); kept
    // ones must each appear exactly once in the finished partition
    for p in &kept {
        assert_eq!(occurrences(&tree, p), 1);
    }
}
