//! A reusable 2D affine transform.

/// A 2x3 affine transform mapping `(x, y)` to
/// `(sx*x + kx*y + tx, ky*x + sy*y + ty)`.
///
/// The rasterizer owns one `Matrix` as scratch state: it is reset and
/// rebuilt for every positioned element instead of being reallocated.
/// Transform steps compose so that the most recently applied step acts
/// last.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    sx: f32,
    kx: f32,
    tx: f32,
    ky: f32,
    sy: f32,
    ty: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            sx: 1.0,
            kx: 0.0,
            tx: 0.0,
            ky: 0.0,
            sy: 1.0,
            ty: 0.0,
        }
    }

    /// Reset to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Apply a translation after the current transform.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pre_concat(Self {
            tx: dx,
            ty: dy,
            ..Self::identity()
        });
    }

    /// Apply a scale about the given pivot after the current
    /// transform.
    pub fn scale(&mut self, sx: f32, sy: f32, pivot_x: f32, pivot_y: f32) {
        self.pre_concat(Self {
            sx,
            sy,
            tx: pivot_x - sx * pivot_x,
            ty: pivot_y - sy * pivot_y,
            ..Self::identity()
        });
    }

    /// Apply a rotation in radians about the given pivot after the
    /// current transform.
    pub fn rotate(&mut self, radians: f32, pivot_x: f32, pivot_y: f32) {
        let (sin, cos) = radians.sin_cos();
        self.pre_concat(Self {
            sx: cos,
            kx: -sin,
            tx: pivot_x - cos * pivot_x + sin * pivot_y,
            ky: sin,
            sy: cos,
            ty: pivot_y - sin * pivot_x - cos * pivot_y,
        });
    }

    /// Map a point through the transform.
    #[must_use]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.sx * x + self.kx * y + self.tx,
            self.ky * x + self.sy * y + self.ty,
        )
    }

    /// The transform components as `[sx, kx, tx, ky, sy, ty]`.
    #[must_use]
    pub const fn components(&self) -> [f32; 6] {
        [self.sx, self.kx, self.tx, self.ky, self.sy, self.ty]
    }

    // self = other * self, so `other` acts after everything already in
    // the matrix.
    fn pre_concat(&mut self, other: Self) {
        let sx = other.sx * self.sx + other.kx * self.ky;
        let kx = other.sx * self.kx + other.kx * self.sy;
        let tx = other.sx * self.tx + other.kx * self.ty + other.tx;
        let ky = other.ky * self.sx + other.sy * self.ky;
        let sy = other.ky * self.kx + other.sy * self.sy;
        let ty = other.ky * self.tx + other.sy * self.ty + other.ty;
        *self = Self {
            sx,
            kx,
            tx,
            ky,
            sy,
            ty,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;

    fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-4 && (actual.1 - expected.1).abs() < 1e-4,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let matrix = Matrix::identity();
        assert_close(matrix.apply(3.0, -4.0), (3.0, -4.0));
    }

    #[test]
    fn translate_then_translate_accumulates() {
        let mut matrix = Matrix::identity();
        matrix.translate(5.0, 0.0);
        matrix.translate(0.0, 7.0);
        assert_close(matrix.apply(1.0, 1.0), (6.0, 8.0));
    }

    #[test]
    fn rotation_about_pivot_keeps_pivot_fixed() {
        let mut matrix = Matrix::identity();
        matrix.rotate(std::f32::consts::FRAC_PI_2, 10.0, 10.0);
        assert_close(matrix.apply(10.0, 10.0), (10.0, 10.0));
        assert_close(matrix.apply(12.0, 10.0), (10.0, 12.0));
    }

    #[test]
    fn scale_about_pivot_keeps_pivot_fixed() {
        let mut matrix = Matrix::identity();
        matrix.scale(2.0, 2.0, 4.0, 4.0);
        assert_close(matrix.apply(4.0, 4.0), (4.0, 4.0));
        assert_close(matrix.apply(5.0, 4.0), (6.0, 4.0));
    }

    #[test]
    fn reset_restores_identity() {
        let mut matrix = Matrix::identity();
        matrix.translate(3.0, 3.0);
        matrix.reset();
        assert_eq!(matrix, Matrix::identity());
    }
}
