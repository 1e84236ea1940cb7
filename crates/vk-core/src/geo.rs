//! Planar points and the periodic (toroidal) domain they live on.
//!
//! # Metric
//!
//! Every distance the engine uses is the *minimum-image* Euclidean distance
//! on the torus:
//!
//! ```text
//! dx = min(|x1 - x2|, width  - |x1 - x2|)
//! dy = min(|y1 - y2|, height - |y1 - y2|)
//! d  = sqrt(dx² + dy²)
//! ```
//!
//! Two agents on opposite edges of the domain are therefore close.  The
//! straight-line [`Point::distance`] exists only for comparison and for
//! renderers that need to detect wraparound jumps.

use std::fmt;

use crate::{VkError, VkResult};

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position in domain coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line Euclidean distance, ignoring periodicity.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

// ── Domain ────────────────────────────────────────────────────────────────────

/// The rectangle `[0, width) × [0, height)` with opposite edges identified.
///
/// A domain built with [`Domain::new`] always has positive extents.  A
/// [`Domain::resized`] domain may be degenerate (zero width or height); the
/// engine treats a degenerate domain as having no neighbors and no motion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub width:  f64,
    pub height: f64,
}

impl Domain {
    /// Validate and build a domain with strictly positive, finite extents.
    pub fn new(width: f64, height: f64) -> VkResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(VkError::InvalidDomain { width, height });
        }
        Ok(Self { width, height })
    }

    /// Build a domain for a resize event.  Zero extents are accepted and give
    /// a degenerate domain; negative or non-finite extents are rejected.
    pub fn resized(width: f64, height: f64) -> VkResult<Self> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(VkError::InvalidDomain { width, height });
        }
        Ok(Self { width, height })
    }

    /// `true` when the domain has zero area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// `true` if `p` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// Wrap `p` back onto the torus.
    #[inline]
    pub fn wrap(&self, p: Point) -> Point {
        Point::new(wrap_coord(p.x, self.width), wrap_coord(p.y, self.height))
    }

    /// Signed minimum-image displacement from `a` to `b`.
    ///
    /// Each component lies in `[-extent/2, extent/2]`.
    #[inline]
    pub fn displacement(&self, a: Point, b: Point) -> (f64, f64) {
        (
            min_image(b.x - a.x, self.width),
            min_image(b.y - a.y, self.height),
        )
    }

    /// Squared wrapped distance between `a` and `b`.
    #[inline]
    pub fn distance_sq(&self, a: Point, b: Point) -> f64 {
        let dx = wrapped_gap(a.x, b.x, self.width);
        let dy = wrapped_gap(a.y, b.y, self.height);
        dx * dx + dy * dy
    }

    /// Wrapped Euclidean distance between `a` and `b`.
    #[inline]
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        self.distance_sq(a, b).sqrt()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

// ── Scalar helpers ────────────────────────────────────────────────────────────

/// Reduce `value` into `[0, extent)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `extent`; that
/// case maps to 0 so the half-open invariant holds.  A zero extent maps
/// everything to 0.
#[inline]
pub fn wrap_coord(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    let v = value.rem_euclid(extent);
    if v >= extent { 0.0 } else { v }
}

/// Unsigned per-axis gap on a circle of circumference `extent`.
#[inline]
fn wrapped_gap(a: f64, b: f64, extent: f64) -> f64 {
    let d = (a - b).abs();
    if extent <= 0.0 {
        return d;
    }
    let d = d % extent;
    d.min(extent - d)
}

/// Shift a signed delta into `[-extent/2, extent/2]`.
#[inline]
fn min_image(delta: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return delta;
    }
    let d = delta.rem_euclid(extent);
    if d > extent * 0.5 { d - extent } else { d }
}
