//! Raycast Module
//!
//! Ray/sphere picking against a flat list of colliders. This is the
//! in-process [`SpatialQuery`] used by headless hosts; a physics engine
//! would replace it in a full game.

use glam::Vec3;

use super::look::{LayerMask, RayHit, SpatialQuery};
use crate::world::EntityId;

/// Distance along a normalized ray to a sphere, if it is hit in front of the
/// origin.
///
/// Solves `|origin + t*dir - center|^2 = radius^2` with `|dir| = 1`, which
/// reduces to `t^2 + 2t(oc.d) + (oc.oc - r^2) = 0`.
pub fn ray_sphere_distance(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t1 = -b - sqrt_disc;
    let t2 = -b + sqrt_disc;

    if t1 > 0.001 {
        Some(t1)
    } else if t2 > 0.001 {
        // Origin is inside the sphere
        Some(t2)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    pub entity: EntityId,
    pub center: Vec3,
    pub radius: f32,
    pub layers: LayerMask,
}

/// Colliders plus the current view ray.
#[derive(Debug, Clone)]
pub struct ColliderScene {
    eye: Vec3,
    forward: Vec3,
    colliders: Vec<SphereCollider>,
}

impl Default for ColliderScene {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            colliders: Vec::new(),
        }
    }
}

impl ColliderScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, collider: SphereCollider) {
        self.colliders.retain(|c| c.entity != collider.entity);
        self.colliders.push(collider);
    }

    pub fn remove(&mut self, entity: EntityId) {
        self.colliders.retain(|c| c.entity != entity);
    }

    pub fn set_view(&mut self, eye: Vec3, forward: Vec3) {
        self.eye = eye;
        self.forward = forward.normalize_or(Vec3::NEG_Z);
    }

    /// Point the view ray at a world position.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = target - self.eye;
        self.set_view(self.eye, forward);
    }

    pub fn move_collider(&mut self, entity: EntityId, center: Vec3) {
        if let Some(collider) = self.colliders.iter_mut().find(|c| c.entity == entity) {
            collider.center = center;
        }
    }

    pub fn set_layers(&mut self, entity: EntityId, layers: LayerMask) {
        if let Some(collider) = self.colliders.iter_mut().find(|c| c.entity == entity) {
            collider.layers = layers;
        }
    }

    pub fn collider(&self, entity: EntityId) -> Option<&SphereCollider> {
        self.colliders.iter().find(|c| c.entity == entity)
    }
}

impl SpatialQuery for ColliderScene {
    fn raycast_forward(&self, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        self.colliders
            .iter()
            .filter(|c| c.layers.intersects(mask))
            .filter_map(|c| {
                ray_sphere_distance(self.eye, self.forward, c.center, c.radius)
                    .map(|distance| RayHit { entity: c.entity, distance })
            })
            .filter(|hit| hit.distance <= max_distance)
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(id: u32, z: f32, layers: LayerMask) -> SphereCollider {
        SphereCollider {
            entity: EntityId(id),
            center: Vec3::new(0.0, 0.0, z),
            radius: 0.25,
            layers,
        }
    }

    #[test]
    fn test_ray_sphere_hit_in_front() {
        let t = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_ray_sphere_behind_misses() {
        let t = ray_sphere_distance(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_ray_from_inside_sphere() {
        let t = ray_sphere_distance(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert!((t.unwrap() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_scene_returns_nearest_on_mask() {
        let mut scene = ColliderScene::new();
        scene.add(sphere(1, -3.0, LayerMask::INTERACTABLE));
        scene.add(sphere(2, -2.0, LayerMask::PUT_BACK));
        scene.add(sphere(3, -5.0, LayerMask::INTERACTABLE));

        let hit = scene.raycast_forward(10.0, LayerMask::INTERACTABLE).unwrap();
        assert_eq!(hit.entity, EntityId(1));

        let hit = scene.raycast_forward(10.0, LayerMask::PUT_BACK).unwrap();
        assert_eq!(hit.entity, EntityId(2));
    }

    #[test]
    fn test_scene_respects_max_distance() {
        let mut scene = ColliderScene::new();
        scene.add(sphere(1, -3.0, LayerMask::INTERACTABLE));
        assert!(scene.raycast_forward(2.0, LayerMask::INTERACTABLE).is_none());
    }

    #[test]
    fn test_look_at_turns_view() {
        let mut scene = ColliderScene::new();
        scene.add(SphereCollider {
            entity: EntityId(4),
            center: Vec3::new(2.0, 0.0, 0.0),
            radius: 0.25,
            layers: LayerMask::INTERACTABLE,
        });
        assert!(scene.raycast_forward(5.0, LayerMask::ALL).is_none());

        scene.look_at(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(scene.raycast_forward(5.0, LayerMask::ALL).unwrap().entity, EntityId(4));
    }
}
