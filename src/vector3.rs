use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use log::debug;

use crate::utils::{components, normalize_zero};
use crate::{Error, Result};

/// Squared per-axis deltas below this are treated as no movement on that
/// axis when interpolating. The value is 1.0e-7 rounded to single precision.
const MIN_AXIS_DELTA_SQUARED: f64 = 1.0000000116860974e-7;

/// A coordinate in (x, y, z) world space, with y as the vertical axis.
///
/// Vectors are immutable values: no method mutates its receiver, and every
/// operation builds its result through [`Vector3::new`], which stores
/// negative zero as positive zero.
///
/// # Examples
///
/// ```
/// use worldvec::Vector3;
///
/// let origin = Vector3::default();
/// let corner = Vector3::new(2.0, 3.0, 6.0);
/// assert_eq!(7.0, origin.distance(corner));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
    /// The z coordinate.
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector.
    ///
    /// Negative zero components are stored as positive zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let vector = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(1.0, vector.x);
    /// assert_eq!(2.0, vector.y);
    /// assert_eq!(3.0, vector.z);
    /// assert!(Vector3::new(-0.0, 0.0, 0.0).x.is_sign_positive());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 {
            x: normalize_zero(x),
            y: normalize_zero(y),
            z: normalize_zero(z),
        }
    }

    /// Returns the specified vector minus this one.
    ///
    /// Note the reversed operand order: the result is `other - self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0);
    /// let b = Vector3::new(4.0, 6.0, 8.0);
    /// assert_eq!(Vector3::new(3.0, 4.0, 5.0), a.subtract_reverse(b));
    /// ```
    pub fn subtract_reverse(&self, other: Vector3) -> Vector3 {
        Vector3::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Returns this vector offset by the given per-axis deltas.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let vector = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Vector3::new(2.0, 4.0, 6.0), vector.add_vector(1.0, 2.0, 3.0));
    /// ```
    pub fn add_vector(&self, x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(self.x + x, self.y + y, self.z + z)
    }

    /// Returns this vector with every axis multiplied by `factor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let vector = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Vector3::new(2.0, 4.0, 6.0), vector.scale(2.0));
    /// ```
    pub fn scale(&self, factor: f64) -> Vector3 {
        Vector3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// The square of the Euclidean distance to the specified vector.
    ///
    /// Never negative, and zero exactly when the vectors are component-wise
    /// equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let origin = Vector3::default();
    /// assert_eq!(49.0, origin.square_distance_to(Vector3::new(2.0, 3.0, 6.0)));
    /// ```
    pub fn square_distance_to(&self, other: Vector3) -> f64 {
        let x = other.x - self.x;
        let y = other.y - self.y;
        let z = other.z - self.z;
        x * x + y * y + z * z
    }

    /// The Euclidean distance to the specified vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let origin = Vector3::default();
    /// assert_eq!(7.0, origin.distance(Vector3::new(2.0, 3.0, 6.0)));
    /// ```
    pub fn distance(&self, other: Vector3) -> f64 {
        self.square_distance_to(other).sqrt()
    }

    /// The length of this vector, i.e. its distance from the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// assert_eq!(7.0, Vector3::new(2.0, 3.0, 6.0).length());
    /// ```
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the point with the given x value on the segment from this
    /// vector to `other`, or `None`.
    ///
    /// `None` means the segment has no unique point at that x value: either
    /// the segment's x extent is (near) zero, or the value lies outside the
    /// segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let start = Vector3::new(0.0, 0.0, 0.0);
    /// let end = Vector3::new(10.0, 10.0, 10.0);
    /// assert_eq!(
    ///     Some(Vector3::new(5.0, 5.0, 5.0)),
    ///     start.intermediate_with_x(end, 5.0)
    /// );
    /// assert_eq!(None, start.intermediate_with_x(end, 11.0));
    /// ```
    pub fn intermediate_with_x(&self, other: Vector3, x: f64) -> Option<Vector3> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        if dx * dx < MIN_AXIS_DELTA_SQUARED {
            return None;
        }
        let t = (x - self.x) / dx;
        if (0.0..=1.0).contains(&t) {
            Some(Vector3::new(
                self.x + dx * t,
                self.y + dy * t,
                self.z + dz * t,
            ))
        } else {
            None
        }
    }

    /// Returns the point with the given y value on the segment from this
    /// vector to `other`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let start = Vector3::new(0.0, 0.0, 0.0);
    /// let end = Vector3::new(10.0, 10.0, 10.0);
    /// assert_eq!(
    ///     Some(Vector3::new(2.0, 2.0, 2.0)),
    ///     start.intermediate_with_y(end, 2.0)
    /// );
    /// ```
    pub fn intermediate_with_y(&self, other: Vector3, y: f64) -> Option<Vector3> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        if dy * dy < MIN_AXIS_DELTA_SQUARED {
            return None;
        }
        let t = (y - self.y) / dy;
        if (0.0..=1.0).contains(&t) {
            Some(Vector3::new(
                self.x + dx * t,
                self.y + dy * t,
                self.z + dz * t,
            ))
        } else {
            None
        }
    }

    /// Returns the point with the given z value on the segment from this
    /// vector to `other`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let level = Vector3::new(0.0, 1.0, 2.0);
    /// assert_eq!(
    ///     None,
    ///     level.intermediate_with_z(Vector3::new(5.0, 3.0, 2.0), 2.0)
    /// );
    /// ```
    pub fn intermediate_with_z(&self, other: Vector3, z: f64) -> Option<Vector3> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        if dz * dz < MIN_AXIS_DELTA_SQUARED {
            return None;
        }
        let t = (z - self.z) / dz;
        if (0.0..=1.0).contains(&t) {
            Some(Vector3::new(
                self.x + dx * t,
                self.y + dy * t,
                self.z + dz * t,
            ))
        } else {
            None
        }
    }

    /// Compares the floor of each component, i.e. equality on the integer
    /// grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// let a = Vector3::new(1.2, 2.9, 3.5);
    /// let b = Vector3::new(1.7, 2.1, 3.0);
    /// assert!(a.floored_eq(b));
    /// assert!(!a.floored_eq(b.add_vector(0.0, 0.0, 1.0)));
    /// ```
    pub fn floored_eq(&self, other: Vector3) -> bool {
        self.x.floor() == other.x.floor()
            && self.y.floor() == other.y.floor()
            && self.z.floor() == other.z.floor()
    }

    /// Parses a vector string, returning `None` if it is malformed.
    ///
    /// This is the lossy form of the [`FromStr`] implementation: the typed
    /// rejection is logged at debug level and discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector3;
    ///
    /// assert_eq!(Some(Vector3::new(1.0, 2.0, 3.0)), Vector3::parse("(1, 2, 3)"));
    /// assert_eq!(None, Vector3::parse("bad"));
    /// ```
    pub fn parse(text: &str) -> Option<Vector3> {
        match text.parse() {
            Ok(vector) => Some(vector),
            Err(err) => {
                debug!("discarding unparseable vector string {text:?}: {err}");
                None
            }
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vector3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Vector3> {
        let [x, y, z] = components(s)?;
        Ok(Vector3::new(x, y, z))
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Vector3 {
        Vector3::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Vector3 {
        Vector3::new(x, y, z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, factor: f64) -> Vector3 {
        Vector3::new(self.x * factor, self.y * factor, self.z * factor)
    }
}
