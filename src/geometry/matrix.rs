use std::fmt;
use std::ops::Mul;

use crate::errors::{Error, Result};
use crate::types::{fstr, is_close, nonzero};

/// A 2D affine transform as a 3x3 homogeneous matrix.
///
/// The last row is always `(0, 0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix([[f64; 3]; 3]);

/// Origin, rotation and per-axis scale extracted from a `Matrix`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    pub tx: f64,
    pub ty: f64,
    pub sx: f64,
    pub sy: f64,
    /// Counter-clockwise rotation in degrees
    pub angle: f64,
}

impl Default for Decomposed {
    fn default() -> Self {
        Self {
            tx: 0.,
            ty: 0.,
            sx: 1.,
            sy: 1.,
            angle: 0.,
        }
    }
}

impl Decomposed {
    /// Rebuild the matrix this decomposition describes:
    ///
    /// ```text
    /// sx * cos(a)   -sy * sin(a)   tx
    /// sx * sin(a)    sy * cos(a)   ty
    ///      0              0         1
    /// ```
    pub fn matrix(&self) -> Matrix {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        Matrix([
            [self.sx * cos, -self.sy * sin, self.tx],
            [self.sx * sin, self.sy * cos, self.ty],
            [0., 0., 1.],
        ])
    }
}

/// Sign as -1, 0 or 1; unlike `f64::signum()`, zero has no sign.
fn sign(x: f64) -> i8 {
    if x > 0. {
        1
    } else if x < 0. {
        -1
    } else {
        0
    }
}

impl Matrix {
    /// Build from the six values of an SVG `matrix(a, b, c, d, e, f)`
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self([[a, c, e], [b, d, f], [0., 0., 1.]])
    }

    pub fn identity() -> Self {
        Self::new(1., 0., 0., 1., 0., 0.)
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1., 0., 0., 1., tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0., 0., sy, 0., 0.)
    }

    /// Rotation by `angle` degrees
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0., 0.)
    }

    /// Conjugate with a y-axis flip, converting between SVG (y-down) and
    /// Modelica (y-up) coordinates. The operation is its own inverse.
    pub fn flip_y(&self) -> Self {
        let flip = Self::scale(1., -1.);
        flip * *self * flip
    }

    #[cfg(test)]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.0;
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }

    /// Element-wise comparison with the tolerances used to validate decompositions
    pub fn is_close(&self, other: &Matrix) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| is_close(*a, *b, 1e-4, 1e-3))
    }

    #[cfg(test)]
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() < 1e-9)
    }

    /// Split into translation, rotation and per-axis scale.
    ///
    /// The sign of the scale factors is ambiguous (`sin(-x) = -sin(x)`,
    /// `cos(-x) = cos(x)`); when a flip is required it is always applied to
    /// the x axis. Shear cannot be represented; in strict mode a matrix which
    /// is not reproduced by its decomposition is rejected.
    pub fn decompose(&self, strict: bool) -> Result<Decomposed> {
        let m = &self.0;
        let tx = m[0][2];
        let ty = m[1][2];
        let mut sx = m[0][0].hypot(m[1][0]);
        let sy = m[0][1].hypot(m[1][1]);
        let flipped = if !nonzero(m[1][0]) {
            sign(m[0][0]) != sign(m[1][1])
        } else {
            sign(m[1][0]) == sign(m[0][1])
        };
        if flipped {
            sx = -sx;
        }
        let angle = if sx == 0. {
            0.
        } else {
            (m[1][0] / sx).atan2(m[0][0] / sx).to_degrees()
        };
        let result = Decomposed {
            tx,
            ty,
            sx,
            sy,
            angle,
        };
        if strict {
            let rebuilt = result.matrix();
            if !self.is_close(&rebuilt) {
                return Err(Error::IrreducibleTransform(format!("{self} != {rebuilt}")));
            }
        }
        Ok(result)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let mut result = [[0.; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Matrix(result)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .0
            .iter()
            .map(|row| format!("[{}, {}, {}]", fstr(row[0]), fstr(row[1]), fstr(row[2])))
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}
