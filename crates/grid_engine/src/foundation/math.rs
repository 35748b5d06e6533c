//! Math utilities and types
//!
//! Provides fundamental math types for 3D game logic. Thin aliases over
//! nalgebra so the rest of the engine never names the backing crate.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and uniform scale
    pub fn from_position_scale(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            scale: Vec3::new(scale, scale, scale),
            ..Default::default()
        }
    }

    /// Create a copy of this transform shifted by an offset
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            rotation: self.rotation,
            scale: self.scale,
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn translated_leaves_rotation_and_scale() {
        let t = Transform::from_position_scale(Vec3::new(1.0, 2.0, 3.0), 2.0);
        let moved = t.translated(Vec3::new(0.5, 0.0, -1.0));
        assert_relative_eq!(moved.position.x, 1.5);
        assert_relative_eq!(moved.position.z, 2.0);
        assert_eq!(moved.scale, t.scale);
        assert_eq!(moved.rotation, t.rotation);
    }

    #[test]
    fn identity_transform_maps_points_to_themselves() {
        let t = Transform::identity();
        let p = Point3::new(4.0, -2.0, 7.5);
        assert_relative_eq!(t.transform_point(p), p);
    }
}
