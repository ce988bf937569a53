//! Column-major 4x4 matrix used for the projection and model-view uniforms.
//!
//! Storage matches what `uniformMatrix4fv` expects with `transpose = false`:
//! sixteen floats, one column after another.

use glam::Vec3;
use std::ops::Mul;

/// A 4x4 `f32` matrix stored as four columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    cols: [[f32; 4]; 4],
}

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Builds a matrix from four columns.
    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Right-handed OpenGL-style perspective projection mapping depth to
    /// clip space `[-1, 1]`.
    ///
    /// `fov_y` is the vertical field of view in radians. The caller is
    /// expected to pass `near > 0`, `far > near` and a positive aspect
    /// ratio; [`SceneConfig`](crate::SceneConfig) validates these.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);
        Self {
            cols: [
                [f / aspect, 0.0, 0.0, 0.0],
                [0.0, f, 0.0, 0.0],
                [0.0, 0.0, (far + near) * nf, -1.0],
                [0.0, 0.0, 2.0 * far * near * nf, 0.0],
            ],
        }
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = [offset.x, offset.y, offset.z, 1.0];
        m
    }

    /// Returns column `index` (0..4).
    pub fn col(&self, index: usize) -> [f32; 4] {
        self.cols[index]
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cols[col][row]
    }

    /// Flattens the matrix into sixteen floats in column-major order.
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (c, col) in self.cols.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(col);
        }
        out
    }

    /// Multiplies a homogeneous column vector by this matrix.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| self.cols[k][row] * v[k]).sum();
        }
        out
    }

    /// Row-major nested arrays, convenient for printing.
    pub fn to_rows(&self) -> [[f32; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                *slot = self.get(r, c);
            }
        }
        rows
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut cols = [[0.0; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            *col = self.transform(rhs.cols[c]);
        }
        Mat4 { cols }
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.to_cols_array())
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self {
            cols: m.to_cols_array_2d(),
        }
    }
}
