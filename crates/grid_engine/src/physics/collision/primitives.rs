//! Primitive collision shapes and intersection algorithms
//!
//! Provides the geometric primitives (rays, planes, frustums, axis-aligned
//! boxes, bounding spheres) with efficient intersection testing algorithms.

use crate::foundation::math::{Mat4, Vec3};

/// A ray for ray casting and picking
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (normalized on construction)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An axis-aligned bounding box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given half-extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if this AABB intersects another AABB
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Check if this AABB intersects a bounding sphere
    ///
    /// Clamps the sphere center onto the box and compares the squared
    /// distance against the squared radius, so touching counts as a hit.
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let closest = Vec3::new(
            sphere.center.x.clamp(self.min.x, self.max.x),
            sphere.center.y.clamp(self.min.y, self.max.y),
            sphere.center.z.clamp(self.min.z, self.max.z),
        );
        let offset = sphere.center - closest;
        offset.magnitude_squared() <= sphere.radius * sphere.radius
    }

    /// Test ray intersection with this AABB using the slab method
    ///
    /// Returns the distance to the entry point if the ray intersects, None
    /// otherwise. A ray starting inside the box reports distance 0.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vec3::new(
            if ray.direction.x != 0.0 { 1.0 / ray.direction.x } else { f32::INFINITY },
            if ray.direction.y != 0.0 { 1.0 / ray.direction.y } else { f32::INFINITY },
            if ray.direction.z != 0.0 { 1.0 / ray.direction.z } else { f32::INFINITY },
        );

        let t1 = (self.min.x - ray.origin.x) * inv_dir.x;
        let t2 = (self.max.x - ray.origin.x) * inv_dir.x;
        let t3 = (self.min.y - ray.origin.y) * inv_dir.y;
        let t4 = (self.max.y - ray.origin.y) * inv_dir.y;
        let t5 = (self.min.z - ray.origin.z) * inv_dir.z;
        let t6 = (self.max.z - ray.origin.z) * inv_dir.z;

        let t_min = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
        let t_max = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

        // Box behind the ray, or slabs never overlap
        if t_max < 0.0 || t_min > t_max {
            return None;
        }

        Some(t_min.max(0.0))
    }

    /// Create a translated copy of this AABB
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this sphere intersects with another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Check if this sphere contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// Test ray intersection with this sphere
    ///
    /// Solves |origin + t*direction - center|^2 = radius^2 and returns the
    /// nearest non-negative root, None if the sphere is missed or entirely
    /// behind the ray.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;

        let a = ray.direction.dot(&ray.direction); // 1.0 for a normalized direction
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        if t1 >= 0.0 {
            Some(t1)
        } else if t2 >= 0.0 {
            Some(t2)
        } else {
            None
        }
    }

    /// Create a translated copy of this sphere
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }
}

/// Plane defined by normal and distance from origin
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Normal vector (should be normalized)
    pub normal: Vec3,
    /// Distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a new plane from normal and distance
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Calculate signed distance from plane to point
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }
}

/// Frustum for visibility culling
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six planes defining the frustum (left, right, bottom, top, near, far)
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Create a frustum from six planes
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extract frustum planes from a view-projection matrix
    ///
    /// Uses the Gribb-Hartmann method: each plane is a sum or difference of
    /// the fourth matrix row with one of the other rows. Planes are
    /// renormalized so signed distances are in world units.
    pub fn from_matrix(vp: &Mat4) -> Self {
        let row = |i: usize| {
            Vec3::new(vp[(i, 0)], vp[(i, 1)], vp[(i, 2)])
        };
        let row_w = |i: usize| vp[(i, 3)];

        let mut planes = [Plane {
            normal: Vec3::zeros(),
            distance: 0.0,
        }; 6];

        let combos: [(Vec3, f32); 6] = [
            (row(3) + row(0), row_w(3) + row_w(0)), // left
            (row(3) - row(0), row_w(3) - row_w(0)), // right
            (row(3) + row(1), row_w(3) + row_w(1)), // bottom
            (row(3) - row(1), row_w(3) - row_w(1)), // top
            (row(3) + row(2), row_w(3) + row_w(2)), // near
            (row(3) - row(2), row_w(3) - row_w(2)), // far
        ];

        for (plane, (normal, distance)) in planes.iter_mut().zip(combos) {
            let length = normal.magnitude();
            if length > f32::EPSILON {
                *plane = Plane {
                    normal: normal / length,
                    distance: distance / length,
                };
            }
        }

        Self { planes }
    }

    /// Check if an AABB is inside or intersects the frustum
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        // For each plane, test the AABB vertex furthest along the plane
        // normal; if even that vertex is outside, the whole box is outside.
        for plane in &self.planes {
            let mut p = aabb.min;
            if plane.normal.x >= 0.0 {
                p.x = aabb.max.x;
            }
            if plane.normal.y >= 0.0 {
                p.y = aabb.max.y;
            }
            if plane.normal.z >= 0.0 {
                p.z = aabb.max.z;
            }

            if plane.distance_to_point(p) < 0.0 {
                return false;
            }
        }

        true
    }

    /// Check if a sphere is inside or intersects the frustum
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        for plane in &self.planes {
            if plane.distance_to_point(sphere.center) < -sphere.radius {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        // Shifted past the sum of extents along x
        let b = a.translated(Vec3::new(2.5, 0.0, 0.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_boxes_count_as_intersecting() {
        let a = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let b = a.translated(Vec3::new(1.0, 0.0, 0.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn overlapping_spheres_intersect() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn spheres_touching_at_radius_sum_count_as_intersecting() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(3.0, 0.0, 0.0), 2.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn spheres_separated_past_radius_sum_do_not_intersect() {
        let a = BoundingSphere::new(Vec3::zeros(), 1.0);
        let b = BoundingSphere::new(Vec3::new(3.1, 0.0, 0.0), 2.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn ray_through_sphere_center_hits_near_surface() {
        let sphere = BoundingSphere::new(Vec3::zeros(), 1.0);
        let ray = Ray::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let distance = sphere.intersect_ray(&ray).expect("ray should hit");
        assert_relative_eq!(distance, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn ray_pointing_away_from_sphere_misses() {
        let sphere = BoundingSphere::new(Vec3::zeros(), 1.0);
        let ray = Ray::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(sphere.intersect_ray(&ray).is_none());
    }

    #[test]
    fn ray_origin_inside_box_reports_zero_distance() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 1.0));

        let distance = aabb.intersect_ray(&ray).expect("ray starts inside");
        assert_relative_eq!(distance, 0.0);
    }

    #[test]
    fn ray_hits_box_face_at_expected_distance() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));

        let distance = aabb.intersect_ray(&ray).expect("ray should hit");
        assert_relative_eq!(distance, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn sphere_touching_box_face_intersects() {
        let aabb = Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0));
        let sphere = BoundingSphere::new(Vec3::new(1.5, 0.5, 0.5), 0.5);
        assert!(aabb.intersects_sphere(&sphere));

        let clear = BoundingSphere::new(Vec3::new(2.1, 0.5, 0.5), 0.5);
        assert!(!aabb.intersects_sphere(&clear));
    }

    #[test]
    fn identity_frustum_is_the_ndc_cube() {
        // Gribb-Hartmann on the identity matrix yields the |x|,|y|,|z| <= 1
        // clip volume, which makes the extraction easy to verify by hand.
        let frustum = Frustum::from_matrix(&Mat4::identity());

        let inside = Aabb::from_center_extents(Vec3::zeros(), Vec3::new(0.5, 0.5, 0.5));
        assert!(frustum.intersects_aabb(&inside));

        let outside = Aabb::from_center_extents(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
        assert!(!frustum.intersects_aabb(&outside));

        let straddling = Aabb::from_center_extents(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
        assert!(frustum.intersects_aabb(&straddling));

        assert!(frustum.intersects_sphere(&BoundingSphere::new(Vec3::zeros(), 0.5)));
        assert!(!frustum.intersects_sphere(&BoundingSphere::new(Vec3::new(0.0, 5.0, 0.0), 0.5)));
    }
}
