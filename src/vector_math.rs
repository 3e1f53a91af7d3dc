//! Random sampling inside spheres and planar motion helpers.
use glam::{Vec2, Vec3};
use rand::{Rng, RngCore};

/// Upper bound on rejection-sampling attempts before falling back to the
/// sphere centre.
const MAX_SPHERE_SAMPLES: usize = 32;

/// Returns a uniformly distributed point inside the unit sphere.
///
/// Uses rejection sampling from the enclosing cube. In the practically
/// impossible case that every attempt lands outside the sphere, the origin is
/// returned so callers always receive a point within bounds.
///
/// # Examples
/// ```
/// use haunt::vector_math::random_in_unit_sphere;
/// use rand::SeedableRng;
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let point = random_in_unit_sphere(&mut rng);
/// assert!(point.length() <= 1.0);
/// ```
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    for _ in 0..MAX_SPHERE_SAMPLES {
        let candidate = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );
        if candidate.length_squared() <= 1.0 {
            return candidate;
        }
    }
    Vec3::ZERO
}

/// Returns a random point within `radius` of `origin`.
///
/// A non-positive or non-finite radius yields `origin` itself.
pub fn random_point_near(origin: Vec3, radius: f32, rng: &mut dyn RngCore) -> Vec3 {
    if !radius.is_finite() || radius <= 0.0 {
        return origin;
    }
    origin + random_in_unit_sphere(rng) * radius
}

/// Returns the magnitude of the horizontal (XZ) component of a velocity.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use haunt::vector_math::horizontal_speed;
/// assert!((horizontal_speed(Vec3::new(3.0, 9.0, 4.0)) - 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn horizontal_speed(velocity: Vec3) -> f32 {
    Vec2::new(velocity.x, velocity.z).length()
}

/// Converts a stick input into a world-space planar direction for a body
/// facing `yaw_radians` about the Y axis.
///
/// Positive `input.y` moves along the body's forward axis (-Z at zero yaw),
/// positive `input.x` along its right axis (+X at zero yaw). The input is not
/// normalised, so analogue magnitudes are preserved.
#[must_use]
pub fn planar_direction(input: Vec2, yaw_radians: f32) -> Vec3 {
    let (sin, cos) = yaw_radians.sin_cos();
    let forward = Vec3::new(-sin, 0.0, -cos);
    let right = Vec3::new(cos, 0.0, -sin);
    right * input.x + forward * input.y
}
