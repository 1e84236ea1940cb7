//! Bounded trailing-path history.
//!
//! A `Trail` is a ring buffer allocated once at its capacity.  Pushing into a
//! full trail evicts the oldest position, so memory never grows past
//! `capacity` entries.  Iteration is newest-first, the order renderers draw
//! a fading tail in.

use std::collections::VecDeque;

use vk_core::{Domain, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    buf: VecDeque<Point>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `p` as the newest position, evicting the oldest when full.
    pub fn push(&mut self, p: Point) {
        if self.capacity == 0 {
            return;
        }
        if self.buf.len() == self.capacity {
            self.buf.pop_back();
        }
        self.buf.push_front(p);
    }

    /// Change the capacity, dropping the oldest positions if shrinking.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.buf.truncate(capacity);
        if capacity > self.buf.capacity() {
            self.buf.reserve_exact(capacity - self.buf.len());
        }
        self.capacity = capacity;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Most recent position, if any.
    #[inline]
    pub fn latest(&self) -> Option<Point> {
        self.buf.front().copied()
    }

    /// Positions, newest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.buf.iter().copied()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Consecutive `(newer, older)` pairs suitable for drawing line segments.
    ///
    /// Pairs whose straight-line gap is at least half the domain extent on
    /// either axis straddle a wraparound and are skipped.
    pub fn segments(&self, domain: Domain) -> impl Iterator<Item = (Point, Point)> + '_ {
        let half_w = domain.width * 0.5;
        let half_h = domain.height * 0.5;
        self.buf
            .iter()
            .zip(self.buf.iter().skip(1))
            .filter(move |(a, b)| (a.x - b.x).abs() < half_w && (a.y - b.y).abs() < half_h)
            .map(|(&a, &b)| (a, b))
    }
}
