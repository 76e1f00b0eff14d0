//! Geometric primitives backing the pointer queries: rays, planes,
//! hit-testable colliders, and UI rects.

use glam::{Vec2, Vec3};

/// A world-space ray with origin and (normalized) direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin in world space.
    pub origin: Vec3,
    /// Ray direction. Expected to be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane defined by a normal and a point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal. Expected to be normalized.
    pub normal: Vec3,
    /// Any point on the plane.
    pub point: Vec3,
}

impl Plane {
    /// Create a plane from a normal and a point on it.
    #[must_use]
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            point,
        }
    }

    /// Distance along `ray` to the plane intersection.
    ///
    /// The result may be negative (plane behind the ray origin) and is
    /// non-finite when the ray is parallel to the plane. Callers that take
    /// `ray.point_at(t)` on a parallel ray get a non-finite point; this
    /// matches the permissive never-fail contract of the pointer queries.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> f32 {
        let denom = ray.direction.dot(self.normal);
        (self.point - ray.origin).dot(self.normal) / denom
    }
}

/// A shape that can be hit-tested against a ray.
///
/// Returns the entry distance along the ray, or `None` on a miss. Hits
/// behind the ray origin do not count.
pub trait Collider {
    /// Distance along `ray` to the first intersection, if any.
    fn raycast(&self, ray: &Ray) -> Option<f32>;
}

/// Sphere collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
}

impl Collider for SphereCollider {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t > 0.0 {
            return Some(t);
        }
        // Try the far intersection (ray origin inside the sphere)
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}

/// Axis-aligned box collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbCollider {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Collider for AabbCollider {
    fn raycast(&self, ray: &Ray) -> Option<f32> {
        // Slab test. Division by a zero direction component yields ±inf,
        // which min/max handle correctly.
        let inv = ray.direction.recip();
        let t0 = (self.min - ray.origin) * inv;
        let t1 = (self.max - ray.origin) * inv;

        let t_near = t0.min(t1);
        let t_far = t0.max(t1);

        let t_entry = t_near.max_element().max(0.0);
        let t_exit = t_far.min_element();

        (t_entry <= t_exit).then_some(t_entry)
    }
}

/// A UI-space rectangle: origin top-left, Y down.
///
/// Containment is half-open, `[x, x + width)` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge (UI space, Y grows downward).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether `point` (in UI space) lies inside the rect.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn plane_raycast_head_on() {
        let plane = Plane::new(Vec3::Y, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        let t = plane.raycast(&ray);
        assert!((t - 10.0).abs() < EPS);
        assert!(ray.point_at(t).length() < EPS);
    }

    #[test]
    fn plane_raycast_oblique() {
        let plane = Plane::new(Vec3::Y, Vec3::new(5.0, 2.0, -3.0));
        let ray = Ray::new(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
        );
        let hit = ray.point_at(plane.raycast(&ray));
        assert!((hit.y - 2.0).abs() < EPS);
    }

    #[test]
    fn plane_raycast_parallel_is_non_finite() {
        let plane = Plane::new(Vec3::Y, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(!plane.raycast(&ray).is_finite());
    }

    #[test]
    fn sphere_hit_and_miss() {
        let sphere = SphereCollider {
            center: Vec3::new(0.0, 0.0, -10.0),
            radius: 1.0,
        };
        let hit_ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let t = sphere.raycast(&hit_ray);
        assert!(t.is_some_and(|t| (t - 9.0).abs() < EPS));

        let miss_ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.raycast(&miss_ray).is_none());
    }

    #[test]
    fn sphere_hit_from_inside() {
        let sphere = SphereCollider {
            center: Vec3::ZERO,
            radius: 2.0,
        };
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = sphere.raycast(&ray);
        assert!(t.is_some_and(|t| (t - 2.0).abs() < EPS));
    }

    #[test]
    fn aabb_hit_and_miss() {
        let aabb = AabbCollider {
            min: Vec3::new(-1.0, -1.0, -11.0),
            max: Vec3::new(1.0, 1.0, -9.0),
        };
        let hit_ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let t = aabb.raycast(&hit_ray);
        assert!(t.is_some_and(|t| (t - 9.0).abs() < EPS));

        let miss_ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(aabb.raycast(&miss_ray).is_none());
    }

    #[test]
    fn aabb_behind_origin_misses() {
        let aabb = AabbCollider {
            min: Vec3::new(-1.0, -1.0, 9.0),
            max: Vec3::new(1.0, 1.0, 11.0),
        };
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(aabb.raycast(&ray).is_none());
    }

    #[test]
    fn rect_contains_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(110.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 70.0)));
        assert!(!rect.contains(Vec2::new(9.9, 40.0)));
    }
}
