//! Properties that hold across many generated planes, points and boxes.

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use occluder_plane::{Aabb, DISTANCE_EPSILON, Plane, PlaneSide, is_sentinel};

const SAMPLES: usize = 200;

/// Small deterministic generator (LCG), enough for spreading samples.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_f32(&mut self) -> f32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.state >> 40) as f32) / ((1u64 << 24) as f32)
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    fn vector(&mut self, extent: f32) -> Vector3<f32> {
        Vector3::new(
            self.range(-extent, extent),
            self.range(-extent, extent),
            self.range(-extent, extent),
        )
    }

    fn unit_plane(&mut self) -> Plane {
        loop {
            let normal = self.vector(1.0);
            if normal.norm() > 0.1 {
                return Plane::from_normal(normal.normalize(), self.range(-10.0, 10.0));
            }
        }
    }

    fn aabb(&mut self) -> Aabb {
        let center = Point3::from(self.vector(20.0));
        let half = Vector3::new(self.range(0.1, 3.0), self.range(0.1, 3.0), self.range(0.1, 3.0));
        Aabb::from_center_half_extents(center, half)
    }
}

#[test]
fn foot_of_perpendicular_lies_on_plane() {
    let mut rng = Rng::new(1);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let foot = plane.point_on_plane();
        assert_relative_eq!(plane.signed_distance(foot), 0.0, epsilon = DISTANCE_EPSILON);
        assert_eq!(plane.classify_point(foot), PlaneSide::Intersects);
    }
}

#[test]
fn negation_flips_every_distance() {
    let mut rng = Rng::new(2);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let point = Point3::from(rng.vector(50.0));
        assert_eq!(plane.negated().signed_distance(point), -plane.signed_distance(point));
    }
}

#[test]
fn translation_round_trip_restores_offset() {
    let mut rng = Rng::new(3);
    for _ in 0..SAMPLES {
        let original = rng.unit_plane();
        let offset = rng.vector(100.0);
        let restored = original.translated(offset).translated(-offset);
        assert_relative_eq!(restored.d, original.d, epsilon = 1e-4);
        assert_eq!(restored.normal(), original.normal());
    }
}

#[test]
fn three_planes_meet_in_a_shared_point() {
    let mut rng = Rng::new(4);
    let mut checked = 0;
    for _ in 0..SAMPLES {
        let planes = [rng.unit_plane(), rng.unit_plane(), rng.unit_plane()];
        let determinant = planes[0]
            .normal()
            .dot(&planes[1].normal().cross(&planes[2].normal()));
        if determinant.abs() < 0.1 {
            continue;
        }

        let point = Plane::intersection(&planes[0], &planes[1], &planes[2]);
        assert!(!is_sentinel(&point));
        for plane in &planes {
            assert_relative_eq!(plane.signed_distance(point), 0.0, epsilon = 1e-3);
        }
        checked += 1;
    }
    assert!(checked > SAMPLES / 10);
}

#[test]
fn any_parallel_pair_gives_sentinel() {
    let mut rng = Rng::new(5);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let parallel = Plane::from_normal(-plane.normal(), rng.range(-10.0, 10.0));
        let other = rng.unit_plane();

        assert!(is_sentinel(&Plane::intersection(&plane, &parallel, &other)));
        assert!(is_sentinel(&Plane::intersection(&other, &plane, &parallel)));
    }
}

#[test]
fn crossing_point_has_zero_distance() {
    let mut rng = Rng::new(6);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let foot = plane.point_on_plane();
        let spread = rng.range(0.5, 5.0);
        let start = foot - plane.normal() * spread + rng.vector(0.1);
        let end = foot + plane.normal() * rng.range(0.5, 5.0) + rng.vector(0.1);

        let point = plane.crossing(start, end);
        assert_relative_eq!(plane.signed_distance(point), 0.0, epsilon = 1e-3);
    }
}

#[test]
fn box_fully_outside_is_reported_outside() {
    let mut rng = Rng::new(7);
    let mut checked = 0;
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let bounds = rng.aabb();
        let all_outside = bounds
            .corners()
            .iter()
            .all(|corner| plane.signed_distance(*corner) > DISTANCE_EPSILON);
        if all_outside {
            assert_eq!(plane.classify_box(&bounds), PlaneSide::Outside);
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn static_outside_is_never_wrong() {
    let mut rng = Rng::new(8);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let bounds = rng.aabb();
        if plane.classify_box(&bounds) == PlaneSide::Outside {
            for corner in bounds.corners() {
                assert_eq!(plane.classify_point(corner), PlaneSide::Outside);
            }
        }
    }
}

#[test]
fn swept_at_rest_matches_static_unless_straddling() {
    let mut rng = Rng::new(9);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let bounds = rng.aabb();

        let fixed = plane.classify_box(&bounds);
        let swept = plane.classify_swept_box(&bounds, Vector3::zeros());

        let straddles = bounds
            .corners()
            .iter()
            .any(|corner| plane.classify_point(*corner) != PlaneSide::Inside);
        if fixed == PlaneSide::Inside && straddles {
            assert_eq!(swept, PlaneSide::Intersects);
        } else {
            assert_eq!(swept, fixed);
        }
    }
}

#[test]
fn swept_classification_describes_moved_box() {
    let mut rng = Rng::new(10);
    for _ in 0..SAMPLES {
        let plane = rng.unit_plane();
        let bounds = rng.aabb();
        let motion = rng.vector(10.0);
        let moved = bounds.translated(motion);

        match plane.classify_swept_box(&bounds, motion) {
            PlaneSide::Inside => {
                for corner in moved.corners() {
                    assert_eq!(plane.classify_point(corner), PlaneSide::Inside);
                }
            }
            PlaneSide::Outside => {
                for corner in moved.corners() {
                    assert_eq!(plane.classify_point(corner), PlaneSide::Outside);
                }
            }
            PlaneSide::Intersects => {}
        }
    }
}
