//! Unit tests for flock-spatial.
//!
//! Most tests use hand-placed agents so the expected neighbor sets can be
//! read off the coordinates; the sweeps draw points from a seeded `SimRng`.

#[cfg(test)]
mod helpers {
    use flock_core::{AgentId, Boundary, Bounds, Vec2};

    use crate::Space;

    /// Place `points` as agents 0, 1, 2, … in a fresh space.
    pub fn space_with(bounds: Bounds, boundary: Boundary, points: &[(f64, f64)]) -> Space {
        let mut space = Space::new(bounds, boundary).unwrap();
        for (i, &(x, y)) in points.iter().enumerate() {
            space.place(AgentId(i as u32), Vec2::new(x, y)).unwrap();
        }
        space
    }

    pub fn sorted(mut ids: Vec<AgentId>) -> Vec<AgentId> {
        ids.sort();
        ids
    }
}

// ── Placement, movement, boundary ─────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use flock_core::{AgentId, Boundary, Bounds, Vec2};

    use super::helpers::space_with;
    use crate::{Space, SpatialError};

    #[test]
    fn invalid_bounds_rejected() {
        let result = Space::new(Bounds::from_size(0.0, 5.0), Boundary::Toroidal);
        assert!(matches!(result, Err(SpatialError::InvalidBounds(_))));
    }

    #[test]
    fn place_in_order_only() {
        let mut space = Space::new(Bounds::from_size(5.0, 5.0), Boundary::Toroidal).unwrap();
        space.place(AgentId(0), Vec2::new(1.0, 1.0)).unwrap();
        let err = space.place(AgentId(5), Vec2::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, SpatialError::OutOfOrderPlacement { expected: AgentId(1), .. }));
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn place_wraps_on_torus() {
        let space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Toroidal, &[(6.0, -1.0)]);
        assert_eq!(space.position(AgentId(0)).unwrap(), Vec2::new(1.0, 4.0));
    }

    #[test]
    fn unknown_agent_errors() {
        let space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Toroidal, &[(1.0, 1.0)]);
        assert!(matches!(space.position(AgentId(3)), Err(SpatialError::AgentNotFound(_))));
    }

    #[test]
    fn move_updates_index() {
        let mut space = space_with(
            Bounds::from_size(100.0, 100.0),
            Boundary::Bounded,
            &[(10.0, 10.0), (90.0, 90.0)],
        );
        let near_origin = crate::NeighborQuery::new(Vec2::new(10.0, 10.0), 5.0).include_center(true);
        assert_eq!(space.neighbors(&near_origin), vec![AgentId(0)]);

        space.move_agent(AgentId(1), Vec2::new(12.0, 11.0)).unwrap();
        space.move_agent(AgentId(0), Vec2::new(50.0, 50.0)).unwrap();
        assert_eq!(space.neighbors(&near_origin), vec![AgentId(1)]);
        assert_eq!(space.positions()[0], Vec2::new(50.0, 50.0));
    }

    #[test]
    fn move_wraps_on_torus() {
        let mut space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Toroidal, &[(4.5, 0.5)]);
        let p = space.move_agent(AgentId(0), Vec2::new(5.75, -0.25)).unwrap();
        assert!((p.x - 0.75).abs() < 1e-12);
        assert!((p.y - 4.75).abs() < 1e-12);
    }

    #[test]
    fn torus_wrap_anchored_at_min() {
        let space = Space::new(Bounds::new(Vec2::new(-2.0, 10.0), 4.0, 4.0), Boundary::Toroidal).unwrap();
        let p = space.resolve_boundary(Vec2::new(3.0, 9.0)).unwrap();
        assert_eq!(p, Vec2::new(-1.0, 13.0));
        let q = space.resolve_boundary(Vec2::new(-10.0, 22.0)).unwrap();
        assert_eq!(q, Vec2::new(-2.0, 10.0));
    }

    #[test]
    fn bounded_out_of_bounds_is_error_not_clamp() {
        let mut space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Bounded, &[(2.0, 2.0)]);
        let err = space.move_agent(AgentId(0), Vec2::new(5.5, 2.0)).unwrap_err();
        assert!(matches!(err, SpatialError::OutOfBounds { .. }));
        // Nothing changed.
        assert_eq!(space.position(AgentId(0)).unwrap(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn non_finite_rejected() {
        let space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Toroidal, &[]);
        let err = space.resolve_boundary(Vec2::new(f64::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, SpatialError::NonFinite(_)));
    }

    #[test]
    fn near_boundary_only_for_bounded() {
        let bounds = Bounds::from_size(10.0, 10.0);
        let walled = Space::new(bounds, Boundary::Bounded).unwrap();
        assert!(walled.is_near_boundary(Vec2::new(0.5, 5.0), 1.0));
        assert!(walled.is_near_boundary(Vec2::new(5.0, 9.8), 1.0));
        assert!(!walled.is_near_boundary(Vec2::new(5.0, 5.0), 1.0));

        let torus = Space::new(bounds, Boundary::Toroidal).unwrap();
        assert!(!torus.is_near_boundary(Vec2::new(0.5, 5.0), 1.0));
    }
}

// ── Distance filter ───────────────────────────────────────────────────────────

#[cfg(test)]
mod distance {
    use flock_core::{AgentId, Boundary, Bounds, RandomSource, SimRng, Vec2};

    use super::helpers::{sorted, space_with};
    use crate::NeighborQuery;

    #[test]
    fn radius_filter_bounded() {
        let space = space_with(
            Bounds::from_size(20.0, 20.0),
            Boundary::Bounded,
            &[(5.0, 5.0), (6.0, 5.0), (5.0, 8.0), (15.0, 15.0)],
        );
        let q = NeighborQuery::new(Vec2::new(5.0, 5.0), 3.0);
        assert_eq!(sorted(space.neighbors(&q)), vec![AgentId(1), AgentId(2)]);
    }

    #[test]
    fn radius_is_inclusive() {
        let space = space_with(Bounds::from_size(20.0, 20.0), Boundary::Bounded, &[(0.0, 0.0), (3.0, 4.0)]);
        let q = NeighborQuery::new(Vec2::ZERO, 5.0);
        assert_eq!(space.neighbors(&q), vec![AgentId(1)]);
    }

    #[test]
    fn neighbors_across_torus_seam() {
        let space = space_with(
            Bounds::from_size(10.0, 10.0),
            Boundary::Toroidal,
            &[(0.5, 5.0), (9.5, 5.0), (5.0, 9.8), (5.0, 0.1), (5.0, 5.0)],
        );
        let q = NeighborQuery::new(Vec2::new(0.5, 5.0), 1.5);
        assert_eq!(space.neighbors(&q), vec![AgentId(1)]);

        let q2 = NeighborQuery::new(Vec2::new(5.0, 9.8), 0.5);
        assert_eq!(space.neighbors(&q2), vec![AgentId(3)]);
    }

    #[test]
    fn corner_wraps_both_axes() {
        let space = space_with(
            Bounds::from_size(10.0, 10.0),
            Boundary::Toroidal,
            &[(0.2, 0.2), (9.9, 9.9)],
        );
        let q = NeighborQuery::new(Vec2::new(0.2, 0.2), 0.5);
        assert_eq!(space.neighbors(&q), vec![AgentId(1)]);
    }

    #[test]
    fn bounded_world_does_not_wrap() {
        let space = space_with(
            Bounds::from_size(10.0, 10.0),
            Boundary::Bounded,
            &[(0.5, 5.0), (9.5, 5.0)],
        );
        let q = NeighborQuery::new(Vec2::new(0.5, 5.0), 1.5);
        assert!(space.neighbors(&q).is_empty());
    }

    #[test]
    fn zero_radius_without_center_is_empty() {
        let points: Vec<(f64, f64)> = (0..50).map(|i| ((i % 5) as f64, (i / 10) as f64)).collect();
        for boundary in [Boundary::Toroidal, Boundary::Bounded] {
            let space = space_with(Bounds::from_size(5.0, 5.0), boundary, &points);
            for &(x, y) in &points {
                let q = NeighborQuery::new(Vec2::new(x, y), 0.0);
                assert!(space.neighbors(&q).is_empty());
            }
        }
    }

    #[test]
    fn include_center_keeps_focal_agent() {
        let space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Toroidal, &[(2.0, 2.0), (2.5, 2.0)]);
        let q = NeighborQuery::new(Vec2::new(2.0, 2.0), 1.0).include_center(true);
        assert_eq!(sorted(space.neighbors(&q)), vec![AgentId(0), AgentId(1)]);

        let q = q.include_center(false);
        assert_eq!(space.neighbors(&q), vec![AgentId(1)]);
    }

    #[test]
    fn large_radius_sees_everyone() {
        let space = space_with(
            Bounds::from_size(5.0, 5.0),
            Boundary::Toroidal,
            &[(0.0, 0.0), (2.5, 2.5), (4.9, 0.1), (1.0, 4.0)],
        );
        let q = NeighborQuery::new(Vec2::new(0.0, 0.0), 100.0);
        assert_eq!(space.neighbors(&q).len(), 3);
        let inf = NeighborQuery::new(Vec2::new(0.0, 0.0), f64::INFINITY);
        assert_eq!(space.neighbors(&inf).len(), 3);
    }

    #[test]
    fn negative_or_nan_radius_is_empty() {
        let space = space_with(Bounds::from_size(5.0, 5.0), Boundary::Toroidal, &[(1.0, 1.0), (1.1, 1.0)]);
        assert!(space.neighbors(&NeighborQuery::new(Vec2::new(1.0, 1.0), -1.0)).is_empty());
        assert!(space.neighbors(&NeighborQuery::new(Vec2::new(1.0, 1.0), f64::NAN)).is_empty());
    }

    #[test]
    fn toroidal_distance_never_exceeds_plain_distance() {
        let bounds = Bounds::from_size(7.0, 3.0);
        let space = space_with(bounds, Boundary::Toroidal, &[]);
        let mut rng = SimRng::new(0x2545_f491_4f6c_dd1d_u64);
        for _ in 0..5_000 {
            let a = Vec2::new(rng.uniform(0.0, 7.0), rng.uniform(0.0, 3.0));
            let b = Vec2::new(rng.uniform(0.0, 7.0), rng.uniform(0.0, 3.0));
            let wrapped = space.distance_squared(a, b);
            let plain = (b - a).magnitude_squared();
            assert!(wrapped <= plain + 1e-12, "{a} {b}: {wrapped} > {plain}");
            let d = space.displacement(a, b);
            assert!(d.x.abs() <= 3.5 + 1e-12 && d.y.abs() <= 1.5 + 1e-12);
        }
    }

    /// The index-backed query must agree with a brute-force scan.
    #[test]
    fn index_matches_brute_force() {
        for boundary in [Boundary::Toroidal, Boundary::Bounded] {
            let bounds = Bounds::from_size(20.0, 12.0);
            let mut rng = SimRng::new(0x9e37_79b9_7f4a_7c15_u64);
            let points: Vec<(f64, f64)> = (0..200)
                .map(|_| (rng.uniform(0.0, 20.0), rng.uniform(0.0, 12.0)))
                .collect();
            let space = space_with(bounds, boundary, &points);

            for &(x, y) in points.iter().take(40) {
                for radius in [0.5, 2.0, 4.5, 5.9] {
                    let center = Vec2::new(x, y);
                    let q = NeighborQuery::new(center, radius);
                    let expected: Vec<AgentId> = space
                        .agent_ids()
                        .filter(|&id| {
                            let d2 = space.distance_squared(center, space.positions()[id.index()]);
                            d2 > 0.0 && d2 <= radius * radius
                        })
                        .collect();
                    assert_eq!(sorted(space.neighbors(&q)), expected, "{boundary} r={radius}");
                }
            }
        }
    }
}

// ── Field of view ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod field_of_view {
    use flock_core::{AgentId, Boundary, Bounds, RandomSource, SimRng, Vec2};

    use super::helpers::{sorted, space_with};
    use crate::{NeighborQuery, in_blind_spot};

    const EAST: Vec2 = Vec2::new(1.0, 0.0);

    /// Focal agent at the centre, one agent in each compass direction.
    fn compass() -> crate::Space {
        space_with(
            Bounds::from_size(10.0, 10.0),
            Boundary::Toroidal,
            &[(5.0, 5.0), (6.0, 5.0), (5.0, 6.0), (4.0, 5.0), (5.0, 4.0)],
        )
    }

    #[test]
    fn rear_blind_spot_hides_agent_behind() {
        let space = compass();
        let q = NeighborQuery::new(Vec2::new(5.0, 5.0), 2.0).heading(EAST).blind_angle(60.0);
        // West (agent 3) is directly behind an east-facing agent.
        assert_eq!(sorted(space.neighbors(&q)), vec![AgentId(1), AgentId(2), AgentId(4)]);
    }

    #[test]
    fn front_blind_spot_when_front_excluded() {
        let space = compass();
        let q = NeighborQuery::new(Vec2::new(5.0, 5.0), 2.0)
            .heading(EAST)
            .blind_angle(60.0)
            .include_front(false);
        assert_eq!(sorted(space.neighbors(&q)), vec![AgentId(2), AgentId(4)]);
    }

    #[test]
    fn wedge_follows_heading() {
        let space = compass();
        let north = Vec2::new(0.0, 3.0);
        let q = NeighborQuery::new(Vec2::new(5.0, 5.0), 2.0).heading(north).blind_angle(90.0);
        assert_eq!(sorted(space.neighbors(&q)), vec![AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn wedge_edges_are_open() {
        // Bearings exactly on the wedge edge stay visible.
        let heading = EAST;
        let edge = Vec2::from_angle(std::f64::consts::PI - std::f64::consts::FRAC_PI_4);
        assert!(!in_blind_spot(heading, edge * 1.0001, 90.0 - 1e-9, true));
        let inside = Vec2::from_angle(std::f64::consts::PI - 0.7);
        assert!(in_blind_spot(heading, inside, 90.0, true));
    }

    #[test]
    fn wedge_straddling_seam() {
        // Facing west puts the blind wedge around bearing 0 / 2π.
        let west = Vec2::new(-1.0, 0.0);
        assert!(in_blind_spot(west, Vec2::from_angle(0.1), 60.0, true));
        assert!(in_blind_spot(west, Vec2::from_angle(-0.1), 60.0, true));
        assert!(!in_blind_spot(west, Vec2::from_angle(1.2), 60.0, true));
    }

    #[test]
    fn blind_angle_reduced_modulo_360() {
        let behind = Vec2::new(-1.0, 0.0);
        assert_eq!(
            in_blind_spot(EAST, behind, 420.0, true),
            in_blind_spot(EAST, behind, 60.0, true)
        );
        assert!(!in_blind_spot(EAST, behind, 360.0, true));
        assert!(in_blind_spot(EAST, behind, -300.0, true));
    }

    #[test]
    fn zero_blind_angle_equals_distance_filter() {
        let bounds = Bounds::from_size(15.0, 15.0);
        let mut rng = SimRng::new(0xdead_beef_cafe_f00d_u64);
        let points: Vec<(f64, f64)> = (0..120)
            .map(|_| (rng.uniform(0.0, 15.0), rng.uniform(0.0, 15.0)))
            .collect();
        let space = space_with(bounds, Boundary::Toroidal, &points);
        for &(x, y) in points.iter().take(30) {
            let heading = Vec2::from_angle(rng.uniform(0.0, 7.0));
            let plain = NeighborQuery::new(Vec2::new(x, y), 4.0);
            let fov = plain.heading(heading).blind_angle(0.0).include_front(false);
            assert_eq!(sorted(space.neighbors(&plain)), sorted(space.neighbors(&fov)));
        }
    }

    #[test]
    fn fov_result_is_subset_of_distance_result() {
        let bounds = Bounds::from_size(15.0, 15.0);
        let mut rng = SimRng::new(0x1234_5678_9abc_def1_u64);
        let points: Vec<(f64, f64)> = (0..100)
            .map(|_| (rng.uniform(0.0, 15.0), rng.uniform(0.0, 15.0)))
            .collect();
        let space = space_with(bounds, Boundary::Toroidal, &points);
        for &(x, y) in points.iter().take(25) {
            let heading = Vec2::from_angle(rng.uniform(0.0, 7.0));
            let plain = sorted(space.neighbors(&NeighborQuery::new(Vec2::new(x, y), 5.0)));
            for angle in [30.0, 90.0, 179.0] {
                for front in [true, false] {
                    let q = NeighborQuery::new(Vec2::new(x, y), 5.0)
                        .heading(heading)
                        .blind_angle(angle)
                        .include_front(front);
                    for id in space.neighbors(&q) {
                        assert!(plain.binary_search(&id).is_ok());
                    }
                }
            }
        }
    }

    /// Widths just below 180° leave the side bearings visible; the two
    /// wedges (front and rear) never overlap.
    #[test]
    fn below_180_sides_visible() {
        let north = Vec2::new(0.0, 1.0);
        let south = Vec2::new(0.0, -1.0);
        for width in [120.0, 170.0, 179.9] {
            assert!(!in_blind_spot(EAST, north, width, false), "width {width}");
            assert!(!in_blind_spot(EAST, south, width, false), "width {width}");
        }
    }

    /// Widths above 180°: the rear wedge reaches the side bearings.
    /// The filter stays well-defined (no panic, deterministic) and monotone
    /// in the width.
    #[test]
    fn at_and_above_180_well_defined() {
        let north = Vec2::new(0.0, 1.0);
        // Wider: the side bearing is swallowed.
        assert!(in_blind_spot(EAST, north, 200.0, true));
        // Straight ahead is still visible with a rear-only wedge below 360°.
        assert!(!in_blind_spot(EAST, EAST, 350.0, true));
        // With a front wedge too, everything is blind past 180°.
        for i in 0..36 {
            let bearing = Vec2::from_angle(i as f64 * 10.0_f64.to_radians());
            assert!(in_blind_spot(EAST, bearing, 200.0, false), "bearing {i}0°");
        }

        let mut hidden_prev = 0;
        for width in (0..360).step_by(15) {
            let hidden = (0..72)
                .filter(|i| {
                    let bearing = Vec2::from_angle(*i as f64 * 5.0_f64.to_radians() + 0.01);
                    in_blind_spot(EAST, bearing, width as f64, true)
                })
                .count();
            assert!(hidden >= hidden_prev, "width {width}: {hidden} < {hidden_prev}");
            hidden_prev = hidden;
        }
    }

    #[test]
    fn center_not_subject_to_fov() {
        let space = compass();
        // Facing west puts bearing 0 (the zero offset's atan2) in the wedge.
        let q = NeighborQuery::new(Vec2::new(5.0, 5.0), 0.5)
            .heading(Vec2::new(-1.0, 0.0))
            .blind_angle(90.0)
            .include_center(true);
        assert_eq!(space.neighbors(&q), vec![AgentId(0)]);
    }
}
