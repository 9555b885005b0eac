//! Affine transformations applied while unparsing
//!
//! Provides the matrix and transform used to place nested sketches: each
//! sketch may carry its own transform, and the writer composes them on the
//! way down the tree.

use crate::types::Point;
use std::ops::Mul;

/// Homogeneous 4x4 matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub m: [[f64; 4]; 4],
}

impl Matrix4 {
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        let mut matrix = Self::identity();
        matrix.m[0][3] = tx;
        matrix.m[1][3] = ty;
        matrix.m[2][3] = tz;
        matrix
    }

    pub fn scaling(sx: f64, sy: f64, sz: f64) -> Self {
        let mut matrix = Self::identity();
        matrix.m[0][0] = sx;
        matrix.m[1][1] = sy;
        matrix.m[2][2] = sz;
        matrix
    }

    /// Counter-clockwise rotation in the XY plane, angle in radians
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut matrix = Self::identity();
        matrix.m[0][0] = cos;
        matrix.m[0][1] = -sin;
        matrix.m[1][0] = sin;
        matrix.m[1][1] = cos;
        matrix
    }

    fn row_dot(&self, row: usize, v: [f64; 3]) -> f64 {
        let r = &self.m[row];
        r[0] * v[0] + r[1] * v[1] + r[2] * v[2] + r[3]
    }

    /// Map padded coordinates, dividing by the projective row when it is not degenerate
    pub fn transform_coords(&self, v: [f64; 3]) -> [f64; 3] {
        let w = self.row_dot(3, v);
        let w = if w.abs() < 1e-10 { 1.0 } else { w };
        [
            self.row_dot(0, v) / w,
            self.row_dot(1, v) / w,
            self.row_dot(2, v) / w,
        ]
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Self { m }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Placement of a sketch: any mix of rotation, uniform scaling and translation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub matrix: Matrix4,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Translation that moves the origin to `origin`
    pub fn from_translation(origin: Point) -> Self {
        let [x, y, z] = origin.to_array();
        Self {
            matrix: Matrix4::translation(x, y, z),
        }
    }

    /// Counter-clockwise rotation about the Z axis, angle in degrees
    pub fn from_rotation_degrees(angle: f64) -> Self {
        Self {
            matrix: Matrix4::rotation_z(angle.to_radians()),
        }
    }

    /// Uniform scaling about the origin
    pub fn from_scale(scale: f64) -> Self {
        Self {
            matrix: Matrix4::scaling(scale, scale, scale),
        }
    }

    /// Apply the transform to a point, keeping its dimension
    pub fn apply(&self, point: &Point) -> Point {
        let out = self.matrix.transform_coords(point.to_array());
        Point::with_dimension(out, point.dimension())
    }

    /// Combine with another transform (this transform applied first)
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Combine with another transform (other transform applied first)
    pub fn compose(&self, other: &Transform) -> Transform {
        Transform {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Length scale of the XY plane, used for radii
    pub fn scale_factor(&self) -> f64 {
        let m = &self.matrix.m;
        (m[0][0] * m[0][0] + m[1][0] * m[1][0]).sqrt()
    }

    /// Rotation of the X axis in the XY plane, in degrees
    pub fn rotation_degrees(&self) -> f64 {
        let m = &self.matrix.m;
        m[1][0].atan2(m[0][0]).to_degrees()
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix4::identity()
    }
}
