//! Navigation collaborators consumed by ghost behaviour.
//!
//! Pathfinding and navigation-mesh construction are host concerns. This
//! module defines the query and steering traits the gameplay code calls, plus
//! a small walkable-area resource and a straight-line agent mover that let the
//! crate run headless.

use bevy::prelude::*;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Nearest-traversable-point query.
#[cfg_attr(test, mockall::automock)]
pub trait Navigation {
    /// Returns the traversable point closest to `sample`, provided it lies
    /// within `max_radius`; otherwise `None`.
    fn nearest_traversable(&self, sample: Vec3, max_radius: f32) -> Option<Vec3>;
}

/// Fire-and-forget movement commands for one agent.
#[cfg_attr(test, mockall::automock)]
pub trait Steering {
    /// Requests travel towards `target`.
    fn set_destination(&mut self, target: Vec3);
    /// Sets the agent's travel speed.
    fn set_speed(&mut self, speed: f32);
}

/// Axis-aligned walkable rectangle on the XZ plane at a fixed floor height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkableRegion {
    /// Minimum corner as `(x, z)`.
    pub min: Vec2,
    /// Maximum corner as `(x, z)`.
    pub max: Vec2,
    /// Floor height of the region.
    pub floor: f32,
}

impl WalkableRegion {
    /// Creates a region, ordering the corners so `min <= max` per axis.
    #[must_use]
    pub fn new(corner_a: Vec2, corner_b: Vec2, floor: f32) -> Self {
        Self {
            min: corner_a.min(corner_b),
            max: corner_a.max(corner_b),
            floor,
        }
    }

    /// Closest point of the region to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let planar = Vec2::new(point.x, point.z).clamp(self.min, self.max);
        Vec3::new(planar.x, self.floor, planar.y)
    }
}

/// Walkable area of the current level.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavArea {
    regions: Vec<WalkableRegion>,
}

impl NavArea {
    /// Builds an area from `regions`.
    #[must_use]
    pub const fn new(regions: Vec<WalkableRegion>) -> Self {
        Self { regions }
    }

    /// Adds a walkable region.
    pub fn push(&mut self, region: WalkableRegion) {
        self.regions.push(region);
    }

    /// Regions making up the area.
    #[must_use]
    pub fn regions(&self) -> &[WalkableRegion] {
        &self.regions
    }
}

impl Navigation for NavArea {
    fn nearest_traversable(&self, sample: Vec3, max_radius: f32) -> Option<Vec3> {
        if !sample.is_finite() {
            return None;
        }
        self.regions
            .iter()
            .map(|region| region.closest_point(sample))
            .map(|point| (point.distance(sample), point))
            .filter(|(distance, _)| *distance <= max_radius)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, point)| point)
    }
}

/// Steering state of a navigation agent.
///
/// The agent is disabled while a ghost is staggered; destination requests
/// are dropped until it is enabled again.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct NavAgent {
    destination: Option<Vec3>,
    speed: f32,
    enabled: bool,
}

impl NavAgent {
    /// Creates an enabled agent with no destination.
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self {
            destination: None,
            speed,
            enabled: true,
        }
    }

    /// Current destination, if any.
    #[must_use]
    pub const fn destination(&self) -> Option<Vec3> {
        self.destination
    }

    /// Current travel speed.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether the agent accepts commands and moves.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the agent. Disabling drops the destination.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.destination = None;
        }
        self.enabled = enabled;
    }

    /// Position after travelling from `from` towards the destination for
    /// `delta` seconds, stopping on arrival.
    #[must_use]
    pub fn advance(&self, from: Vec3, delta: f32) -> Vec3 {
        let Some(target) = self.destination.filter(|_| self.enabled) else {
            return from;
        };
        let step = self.speed.max(0.0) * delta;
        let offset = target - from;
        let remaining = offset.length();
        if remaining <= step || remaining <= f32::EPSILON {
            target
        } else {
            from + offset / remaining * step
        }
    }
}

impl Steering for NavAgent {
    fn set_destination(&mut self, target: Vec3) {
        if self.enabled {
            self.destination = Some(target);
        }
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

/// Moves every enabled agent straight towards its destination.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn nav_agent_motion_system(time: Res<Time>, mut agents: Query<(&mut Transform, &NavAgent)>) {
    let delta = crate::numeric::sanitize_delta(time.delta_secs());
    for (mut transform, agent) in &mut agents {
        transform.translation = agent.advance(transform.translation, delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn area() -> NavArea {
        NavArea::new(vec![
            WalkableRegion::new(Vec2::new(-10.0, -10.0), Vec2::new(10.0, 10.0), 0.0),
            WalkableRegion::new(Vec2::new(30.0, 0.0), Vec2::new(20.0, 5.0), 2.0),
        ])
    }

    #[rstest]
    fn inside_sample_lands_on_floor(area: NavArea) {
        let point = area
            .nearest_traversable(Vec3::new(3.0, 4.0, -2.0), 10.0)
            .expect("sample above the floor should resolve");
        assert_eq!(point, Vec3::new(3.0, 0.0, -2.0));
    }

    #[rstest]
    fn picks_closest_region(area: NavArea) {
        let point = area
            .nearest_traversable(Vec3::new(19.0, 2.0, 2.0), 5.0)
            .expect("second region is within reach");
        assert_eq!(point, Vec3::new(20.0, 2.0, 2.0));
    }

    #[rstest]
    fn out_of_reach_sample_is_not_found(area: NavArea) {
        assert!(area
            .nearest_traversable(Vec3::new(0.0, 0.0, 40.0), 5.0)
            .is_none());
    }

    #[test]
    fn empty_area_finds_nothing() {
        assert!(NavArea::default()
            .nearest_traversable(Vec3::ZERO, 100.0)
            .is_none());
    }

    #[test]
    fn disabled_agent_ignores_destination() {
        let mut agent = NavAgent::new(3.0);
        agent.set_enabled(false);
        agent.set_destination(Vec3::X);
        assert_eq!(agent.destination(), None);
        assert_eq!(agent.advance(Vec3::ZERO, 1.0), Vec3::ZERO);
    }

    #[rstest]
    #[case::partial(0.5, Vec3::new(1.5, 0.0, 0.0))]
    #[case::arrives(10.0, Vec3::new(4.0, 0.0, 0.0))]
    fn agent_advances_towards_destination(#[case] delta: f32, #[case] expected: Vec3) {
        let mut agent = NavAgent::new(3.0);
        agent.set_destination(Vec3::new(4.0, 0.0, 0.0));
        let next = agent.advance(Vec3::ZERO, delta);
        assert_relative_eq!(next.x, expected.x);
        assert_relative_eq!(next.z, expected.z);
    }
}
