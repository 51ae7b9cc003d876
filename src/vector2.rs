use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use log::debug;

use crate::utils::{components, normalize_zero};
use crate::{Error, Result};

/// Squared per-axis deltas below this are treated as no movement on that
/// axis when interpolating. The value is 1.0e-7 rounded to single precision.
const MIN_AXIS_DELTA_SQUARED: f64 = 1.0000000116860974e-7;

/// A coordinate on the horizontal (x, z) ground plane of a y-up world.
///
/// Vectors are immutable values: no method mutates its receiver, and every
/// operation builds its result through [`Vector2::new`], which stores
/// negative zero as positive zero.
///
/// # Examples
///
/// ```
/// use worldvec::Vector2;
///
/// let origin = Vector2::default();
/// let corner = Vector2::new(3.0, 4.0);
/// assert_eq!(5.0, origin.distance(corner));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// The x coordinate.
    pub x: f64,
    /// The z coordinate.
    pub z: f64,
}

impl Vector2 {
    /// Creates a new vector.
    ///
    /// Negative zero components are stored as positive zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// let vector = Vector2::new(1.0, 2.0);
    /// assert_eq!(1.0, vector.x);
    /// assert_eq!(2.0, vector.z);
    /// assert!(Vector2::new(-0.0, 0.0).x.is_sign_positive());
    /// ```
    pub fn new(x: f64, z: f64) -> Vector2 {
        Vector2 {
            x: normalize_zero(x),
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
    /// use worldvec::Vector2;
    ///
    /// let a = Vector2::new(1.0, 2.0);
    /// let b = Vector2::new(4.0, 6.0);
    /// assert_eq!(Vector2::new(3.0, 4.0), a.subtract_reverse(b));
    /// ```
    pub fn subtract_reverse(&self, other: Vector2) -> Vector2 {
        Vector2::new(other.x - self.x, other.z - self.z)
    }

    /// Returns this vector offset by the given per-axis deltas.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// let vector = Vector2::new(1.0, 2.0);
    /// assert_eq!(Vector2::new(3.0, 5.0), vector.add_vector(2.0, 3.0));
    /// ```
    pub fn add_vector(&self, x: f64, z: f64) -> Vector2 {
        Vector2::new(self.x + x, self.z + z)
    }

    /// Returns this vector with every axis multiplied by `factor`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// assert_eq!(Vector2::new(2.0, 4.0), Vector2::new(1.0, 2.0).scale(2.0));
    /// ```
    pub fn scale(&self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.z * factor)
    }

    /// The square of the Euclidean distance to the specified vector.
    ///
    /// Never negative, and zero exactly when the vectors are component-wise
    /// equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// let origin = Vector2::default();
    /// assert_eq!(25.0, origin.square_distance_to(Vector2::new(3.0, 4.0)));
    /// ```
    pub fn square_distance_to(&self, other: Vector2) -> f64 {
        let x = other.x - self.x;
        let z = other.z - self.z;
        x * x + z * z
    }

    /// The Euclidean distance to the specified vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// let origin = Vector2::default();
    /// assert_eq!(5.0, origin.distance(Vector2::new(3.0, 4.0)));
    /// ```
    pub fn distance(&self, other: Vector2) -> f64 {
        self.square_distance_to(other).sqrt()
    }

    /// The length of this vector, i.e. its distance from the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// assert_eq!(5.0, Vector2::new(3.0, 4.0).length());
    /// ```
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
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
    /// use worldvec::Vector2;
    ///
    /// let start = Vector2::new(0.0, 0.0);
    /// let end = Vector2::new(10.0, 10.0);
    /// assert_eq!(Some(Vector2::new(5.0, 5.0)), start.intermediate_with_x(end, 5.0));
    /// assert_eq!(None, start.intermediate_with_x(end, 11.0));
    /// ```
    pub fn intermediate_with_x(&self, other: Vector2, x: f64) -> Option<Vector2> {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        if dx * dx < MIN_AXIS_DELTA_SQUARED {
            return None;
        }
        let t = (x - self.x) / dx;
        if (0.0..=1.0).contains(&t) {
            Some(Vector2::new(self.x + dx * t, self.z + dz * t))
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
    /// use worldvec::Vector2;
    ///
    /// let start = Vector2::new(0.0, 0.0);
    /// let end = Vector2::new(10.0, 10.0);
    /// assert_eq!(Some(Vector2::new(2.0, 2.0)), start.intermediate_with_z(end, 2.0));
    ///
    /// let flat = Vector2::new(0.0, 2.0);
    /// assert_eq!(None, flat.intermediate_with_z(Vector2::new(5.0, 2.0), 2.0));
    /// ```
    pub fn intermediate_with_z(&self, other: Vector2, z: f64) -> Option<Vector2> {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        if dz * dz < MIN_AXIS_DELTA_SQUARED {
            return None;
        }
        let t = (z - self.z) / dz;
        if (0.0..=1.0).contains(&t) {
            Some(Vector2::new(self.x + dx * t, self.z + dz * t))
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
    /// use worldvec::Vector2;
    ///
    /// assert!(Vector2::new(1.2, 2.9).floored_eq(Vector2::new(1.7, 2.1)));
    /// assert!(!Vector2::new(1.2, 2.9).floored_eq(Vector2::new(2.0, 2.1)));
    /// ```
    pub fn floored_eq(&self, other: Vector2) -> bool {
        self.x.floor() == other.x.floor() && self.z.floor() == other.z.floor()
    }

    /// Parses a vector string, returning `None` if it is malformed.
    ///
    /// This is the lossy form of the [`FromStr`] implementation: the typed
    /// rejection is logged at debug level and discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use worldvec::Vector2;
    ///
    /// assert_eq!(Some(Vector2::new(1.0, 2.0)), Vector2::parse("(1, 2)"));
    /// assert_eq!(None, Vector2::parse("bad"));
    /// ```
    pub fn parse(text: &str) -> Option<Vector2> {
        match text.parse() {
            Ok(vector) => Some(vector),
            Err(err) => {
                debug!("discarding unparseable vector string {text:?}: {err}");
                None
            }
        }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl FromStr for Vector2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Vector2> {
        let [x, z] = components(s)?;
        Ok(Vector2::new(x, z))
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, z): (f64, f64)) -> Vector2 {
        Vector2::new(x, z)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, z]: [f64; 2]) -> Vector2 {
        Vector2::new(x, z)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.z + other.z)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.z - other.z)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.z * factor)
    }
}
