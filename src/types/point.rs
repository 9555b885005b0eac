//! Point types with a variable number of axes

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Coordinate axis of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Position of the axis inside a coordinate array
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A point with one, two or three coordinates.
///
/// Points read from DXF keep exactly the axes that were present in the file:
/// a point given only by codes 10 and 20 has two coordinates, not `[x, y, 0]`.
#[derive(Clone, Copy)]
pub struct Point {
    coords: [f64; 3],
    dimension: usize,
}

impl Point {
    /// Create a 2D point
    pub const fn new(x: f64, y: f64) -> Self {
        Point {
            coords: [x, y, 0.0],
            dimension: 2,
        }
    }

    /// Create a 3D point
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point {
            coords: [x, y, z],
            dimension: 3,
        }
    }

    /// The 2D origin
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    /// Create a point from up to three coordinates (extra values are ignored)
    pub fn from_slice(values: &[f64]) -> Self {
        let dimension = values.len().min(3);
        let mut coords = [0.0; 3];
        coords[..dimension].copy_from_slice(&values[..dimension]);
        Point { coords, dimension }
    }

    /// Number of stored coordinates
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Stored coordinates
    pub fn as_slice(&self) -> &[f64] {
        &self.coords[..self.dimension]
    }

    /// Get a coordinate, `None` when the axis is not stored
    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.as_slice().get(axis.index()).copied()
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    /// Y coordinate, 0 for a 1D point
    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    /// Z coordinate, `None` for a 2D point
    pub fn z(&self) -> Option<f64> {
        self.get(Axis::Z)
    }

    /// Drop the z coordinate
    pub fn to_2d(&self) -> Point {
        Point::from_slice(&self.coords[..self.dimension.min(2)])
    }

    /// Coordinates padded with zeros to three axes
    pub fn to_array(&self) -> [f64; 3] {
        self.coords
    }

    /// Construct a point of the given dimension from padded coordinates
    pub(crate) fn with_dimension(coords: [f64; 3], dimension: usize) -> Self {
        let dimension = dimension.min(3);
        let mut masked = [0.0; 3];
        masked[..dimension].copy_from_slice(&coords[..dimension]);
        Point {
            coords: masked,
            dimension,
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let d = *self - *other;
        d.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{:?}", self.as_slice())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Point::new(value[0], value[1])
    }
}

impl From<[f64; 3]> for Point {
    fn from(value: [f64; 3]) -> Self {
        Point::new_3d(value[0], value[1], value[2])
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Point::new(value.0, value.1)
    }
}

// Mixed-dimension arithmetic treats missing axes as zero and keeps the larger dimension.
impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        let c = [
            self.coords[0] + other.coords[0],
            self.coords[1] + other.coords[1],
            self.coords[2] + other.coords[2],
        ];
        Point::with_dimension(c, self.dimension.max(other.dimension))
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        let c = [
            self.coords[0] - other.coords[0],
            self.coords[1] - other.coords[1],
            self.coords[2] - other.coords[2],
        ];
        Point::with_dimension(c, self.dimension.max(other.dimension))
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, scalar: f64) -> Point {
        let c = [
            self.coords[0] * scalar,
            self.coords[1] * scalar,
            self.coords[2] * scalar,
        ];
        Point::with_dimension(c, self.dimension)
    }
}

/// A point under construction from individually arriving axis values.
///
/// Each axis is set independently; [`PartialPoint::to_point`] drops trailing
/// unset axes instead of defaulting them to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialPoint {
    axes: [Option<f64>; 3],
}

impl PartialPoint {
    pub const fn new() -> Self {
        PartialPoint { axes: [None; 3] }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        self.axes[axis.index()] = Some(value);
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        self.axes[axis.index()]
    }

    /// True when no axis has been set
    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(Option::is_none)
    }

    /// Compose the point; `None` if no axis was set.
    ///
    /// Unset axes before the last set one read as zero.
    pub fn to_point(&self) -> Option<Point> {
        let dimension = self.axes.iter().rposition(Option::is_some)? + 1;
        let coords = [
            self.axes[0].unwrap_or(0.0),
            self.axes[1].unwrap_or(0.0),
            self.axes[2].unwrap_or(0.0),
        ];
        Some(Point::with_dimension(coords, dimension))
    }
}

impl From<Point> for PartialPoint {
    fn from(point: Point) -> Self {
        let mut partial = PartialPoint::new();
        for (i, v) in point.as_slice().iter().enumerate() {
            partial.axes[i] = Some(*v);
        }
        partial
    }
}
