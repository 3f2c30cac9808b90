use crate::meshes::{tetrahedron, unit_box};
use inscribe3d::math::Real;
use inscribe3d::shape::Polytope;
use inscribe3d::solver::{
    BranchAndBoundInscriber, GraphicInscriber, Inscriber, InscriberKind, Objective, SolverStats,
    StopPredicate,
};
use std::time::Duration;

const EXACT_PRECISION: Real = 1.0e-3;
const GRAPHIC_PRECISION: Real = 5.0e-2;

fn check(pattern: &Polytope, contour: &Polytope, expected: Real) {
    let exact_stop = StopPredicate::with_precision(EXACT_PRECISION)
        .unwrap()
        .with_max_duration(Duration::from_secs(60));
    let mut stats = SolverStats::default();
    let exact = BranchAndBoundInscriber::default().inscribe_with_stats(
        pattern,
        contour,
        &exact_stop,
        &mut stats,
    );

    assert!(
        (exact.radius - expected).abs() <= EXACT_PRECISION,
        "{} in {}: {} instead of {}",
        pattern.name(),
        contour.name(),
        exact.radius,
        expected
    );
    assert!(stats.objective_calls > 0);

    // The returned center achieves the returned radius.
    let objective = Objective::new(pattern, contour);
    assert_relative_eq!(objective.eval(&exact.center), exact.radius, epsilon = 1.0e-9);

    let graphic_stop = StopPredicate::with_precision(GRAPHIC_PRECISION)
        .unwrap()
        .with_max_duration(Duration::from_secs(120));
    let graphic = InscriberKind::Graphic(GraphicInscriber::default()).inscribe(
        pattern,
        contour,
        &graphic_stop,
    );

    // Every center found on the grid is feasible.
    assert!(graphic.radius <= expected + EXACT_PRECISION);
    assert!(objective.eval(&graphic.center) >= graphic.radius - 1.0e-6);
    assert!(
        graphic.radius >= exact.radius - GRAPHIC_PRECISION - EXACT_PRECISION,
        "{} in {}: {} with the grid, {} exactly",
        pattern.name(),
        contour.name(),
        graphic.radius,
        exact.radius
    );
}

#[test]
fn box_in_box() {
    check(&unit_box(), &unit_box(), 1.0);
}

#[test]
fn tetrahedron_in_tetrahedron() {
    check(&tetrahedron(), &tetrahedron(), 1.0);
}

#[test]
fn box_in_tetrahedron() {
    check(&unit_box(), &tetrahedron(), 0.57339);
}

#[test]
fn target_value_stops_early() {
    let stop = StopPredicate::new(None, Some(0.5), None).unwrap();
    let solution = BranchAndBoundInscriber::default().inscribe(&unit_box(), &tetrahedron(), &stop);

    assert!(solution.radius >= 0.5);
    assert!(solution.radius <= 0.57339 + EXACT_PRECISION);
}
