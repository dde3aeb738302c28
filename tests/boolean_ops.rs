#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use polyclip::math::polygon_2d::rotate_to_canonical_start;
use polyclip::math::Point2;
use polyclip::operations::boolean::{boolean_execute, BooleanOp, Intersect, ReverseSubtract, Subtract, Union};
use polyclip::operations::query::Area;

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn square(x: f64, y: f64, size: f64) -> Vec<Point2> {
    pts(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}

fn assert_polygon_eq(actual: &[Point2], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len(), "vertex count: {actual:?}");
    for (a, &(x, y)) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, y, epsilon = 1e-9);
    }
}

fn subject() -> Vec<Point2> {
    pts(&[(1.5, 1.3), (7.5, 2.5), (4.0, 3.0), (4.5, 6.5)])
}

fn clip() -> Vec<Point2> {
    pts(&[
        (5.0, 4.5),
        (3.0, 5.5),
        (1.0, 4.0),
        (1.5, 3.5),
        (0.0, 2.0),
        (3.0, 2.3),
        (2.5, 1.0),
        (5.5, 0.0),
    ])
}

/// Four crossings of the subject with the clip polygon split `A \ B` into
/// three corner pieces.
#[test]
fn golden_difference() {
    let result = Subtract::new(&subject(), &clip()).execute().unwrap();
    assert_eq!(result.len(), 3);
    assert_polygon_eq(
        &result[0],
        &[
            (65.0 / 24.0, 37.0 / 24.0),
            (1.5, 1.3),
            (99.0 / 49.0, 1079.0 / 490.0),
            (3.0, 2.3),
        ],
    );
    assert_polygon_eq(
        &result[1],
        &[
            (485.0 / 92.0, 189.0 / 92.0),
            (7.5, 2.5),
            (643.0 / 124.0, 351.0 / 124.0),
        ],
    );
    assert_polygon_eq(
        &result[2],
        &[
            (64.0 / 15.0, 73.0 / 15.0),
            (4.5, 6.5),
            (249.0 / 67.0, 689.0 / 134.0),
        ],
    );
}

#[test]
fn golden_other_operations() {
    let (a, b) = (subject(), clip());
    let intersection = Intersect::new(&a, &b).execute().unwrap();
    let union = Union::new(&a, &b).execute().unwrap();
    let reversed = ReverseSubtract::new(&a, &b).execute().unwrap();

    assert_eq!(intersection.len(), 1);
    assert_eq!(intersection[0].len(), 8);
    assert_eq!(union.len(), 1);
    assert_eq!(union[0].len(), 16);
    assert_eq!(reversed.len(), 3);
}

#[test]
fn area_decomposition_golden() {
    let (a, b) = (subject(), clip());
    let intersection = Area::total(&boolean_execute(&a, &b, BooleanOp::Intersect).unwrap());
    let difference = Area::total(&boolean_execute(&a, &b, BooleanOp::Subtract).unwrap());
    let reversed = Area::total(&boolean_execute(&a, &b, BooleanOp::ReverseSubtract).unwrap());
    let union = Area::total(&boolean_execute(&a, &b, BooleanOp::Union).unwrap());

    assert_abs_diff_eq!(intersection + difference + reversed, union, epsilon = 1e-9);
    assert_abs_diff_eq!(intersection + difference, Area::new(&a).execute(), epsilon = 1e-9);
    assert_abs_diff_eq!(intersection + reversed, Area::new(&b).execute(), epsilon = 1e-9);
}

#[test]
fn area_decomposition_concave() {
    let cases = [
        (
            pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (1.0, 1.0), (1.0, 4.0), (0.0, 4.0)]),
            pts(&[(0.5, -1.0), (2.5, 1.5), (0.5, 4.5), (-1.5, 2.0)]),
        ),
        (
            pts(&[
                (0.0, 0.0),
                (6.0, 0.0),
                (6.0, 4.0),
                (5.0, 2.0),
                (4.0, 4.0),
                (3.0, 2.0),
                (2.0, 4.0),
                (1.0, 2.0),
                (0.0, 4.0),
            ]),
            pts(&[(-1.0, 1.0), (7.0, 1.0), (7.0, 3.0), (-1.0, 3.0)]),
        ),
    ];

    for (a, b) in &cases {
        let area = |op| Area::total(&boolean_execute(a, b, op).unwrap());
        let union = area(BooleanOp::Union);
        let parts = area(BooleanOp::Intersect)
            + area(BooleanOp::Subtract)
            + area(BooleanOp::ReverseSubtract);
        assert_abs_diff_eq!(parts, union, epsilon = 1e-9);
    }
}

#[test]
fn crown_minus_band_leaves_five_pieces() {
    let crown = pts(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (6.0, 4.0),
        (5.0, 2.0),
        (4.0, 4.0),
        (3.0, 2.0),
        (2.0, 4.0),
        (1.0, 2.0),
        (0.0, 4.0),
    ]);
    let band = pts(&[(-1.0, 1.0), (7.0, 1.0), (7.0, 3.0), (-1.0, 3.0)]);
    let result = Subtract::new(&crown, &band).execute().unwrap();
    assert_eq!(result.len(), 5);
    // The base below the band plus four tooth tips above it.
    assert_abs_diff_eq!(Area::total(&result), 7.5, epsilon = 1e-9);
}

#[test]
fn union_is_commutative_by_area() {
    let (a, b) = (subject(), clip());
    let ab = Area::total(&Union::new(&a, &b).execute().unwrap());
    let ba = Area::total(&Union::new(&b, &a).execute().unwrap());
    assert_abs_diff_eq!(ab, ba, epsilon = 1e-9);
}

#[test]
fn disjoint_convex_polygons() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(3.0, 0.0, 1.0);

    assert!(Intersect::new(&a, &b).execute().unwrap().is_empty());
    assert_eq!(
        Union::new(&a, &b).execute().unwrap(),
        vec![a.clone(), b.clone()]
    );
    assert_eq!(Subtract::new(&a, &b).execute().unwrap(), vec![a.clone()]);
    assert_eq!(ReverseSubtract::new(&a, &b).execute().unwrap(), vec![b]);
}

#[test]
fn containment_without_crossings() {
    let a = square(0.0, 0.0, 10.0);
    let b = pts(&[(3.0, 3.0), (6.0, 4.0), (4.0, 7.0)]);

    assert_eq!(Intersect::new(&a, &b).execute().unwrap(), vec![b.clone()]);
    assert_eq!(Union::new(&a, &b).execute().unwrap(), vec![a.clone()]);
    // No hole can be produced, so the subject comes back whole.
    assert_eq!(Subtract::new(&a, &b).execute().unwrap(), vec![a.clone()]);
    assert!(ReverseSubtract::new(&a, &b).execute().unwrap().is_empty());
}

#[test]
fn self_clip_is_idempotent() {
    let a = clip();
    let result = Intersect::new(&a, &a).execute().unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(
        rotate_to_canonical_start(&result[0]),
        rotate_to_canonical_start(&a)
    );
    assert_eq!(Union::new(&a, &a).execute().unwrap(), vec![a.clone()]);
    assert!(Subtract::new(&a, &a).execute().unwrap().is_empty());
}

#[test]
fn winding_order_does_not_change_the_region() {
    let a = square(0.0, 0.0, 2.0);
    let mut a_cw = a.clone();
    a_cw.reverse();
    let b = square(1.0, 1.0, 2.0);

    for op in [BooleanOp::Intersect, BooleanOp::Union, BooleanOp::Subtract] {
        let ccw = Area::total(&boolean_execute(&a, &b, op).unwrap());
        let cw = Area::total(&boolean_execute(&a_cw, &b, op).unwrap());
        assert_abs_diff_eq!(ccw, cw, epsilon = 1e-12);
    }
}

/// Touching at a single corner is a degenerate contact; it is not treated
/// as a crossing.
#[test]
fn corner_touch_is_not_a_crossing() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(1.0, 1.0, 1.0);
    assert_eq!(
        Union::new(&a, &b).execute().unwrap(),
        vec![a.clone(), b.clone()]
    );
    assert!(Intersect::new(&a, &b).execute().unwrap().is_empty());
}

#[test]
fn invalid_input_fails_fast() {
    let a = square(0.0, 0.0, 1.0);
    let nan = pts(&[(0.0, 0.0), (1.0, f64::INFINITY), (1.0, 1.0)]);
    assert!(Union::new(&a, &nan).execute().is_err());
    assert!(Union::new(&a, &pts(&[(0.0, 0.0)])).execute().is_err());
}
