// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Parametric splitting of line, quadratic, and cubic segments.
//!
//! `SplitRatios` validates the caller's t-values once, up front; the split
//! functions themselves are then infallible and pure. Curve subdivision
//! goes through kurbo's `ParamCurve::subsegment`, which keeps adjacent
//! pieces sharing their boundary anchors bit-for-bit and lands the final
//! piece exactly on the original endpoint.

use kurbo::{CubicBez, Line, ParamCurve, QuadBez};
use thiserror::Error;

/// Caller contract violations in the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplitError {
    #[error("no split ratios were given")]
    EmptyRatios,
    #[error("split ratio {0} is outside the open interval (0, 1)")]
    RatioOutOfRange(f64),
    #[error("split ratios must be strictly increasing ({prev} is followed by {next})")]
    RatiosNotIncreasing { prev: f64, next: f64 },
    #[error("a segment has 2, 3, or 4 control points, got {0}")]
    UnsupportedDegree(usize),
}

/// Validated split positions: strictly increasing, all inside (0, 1).
///
/// The terminal ratio 1.0 is implicit. [`intervals`](Self::intervals)
/// always yields a final interval ending at 1.0, so the last sub-segment
/// closes at the original endpoint.
///
/// Out-of-range values (NaN included), duplicates, and reordered values
/// are rejected at construction rather than clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRatios {
    ratios: Vec<f64>,
}

impl SplitRatios {
    /// Validate a sequence of t-values.
    pub fn new(ratios: impl IntoIterator<Item = f64>) -> Result<Self, SplitError> {
        let ratios: Vec<f64> = ratios.into_iter().collect();
        if ratios.is_empty() {
            return Err(SplitError::EmptyRatios);
        }
        for &t in &ratios {
            // NaN fails both comparisons
            if !(t > 0.0 && t < 1.0) {
                return Err(SplitError::RatioOutOfRange(t));
            }
        }
        for pair in ratios.windows(2) {
            if pair[1] <= pair[0] {
                return Err(SplitError::RatiosNotIncreasing {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { ratios })
    }

    /// The single ratio 0.5, bisecting every segment once.
    pub fn midpoint() -> Self {
        Self { ratios: vec![0.5] }
    }

    /// Ratios dividing a segment into `parts` equal spans.
    ///
    /// `parts` must be at least 2; fewer yields no interior ratio and is
    /// reported as [`SplitError::EmptyRatios`].
    pub fn evenly(parts: usize) -> Result<Self, SplitError> {
        Self::new((1..parts).map(|i| i as f64 / parts as f64))
    }

    /// Number of split positions (one less than the sub-segment count)
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Always false: construction rejects an empty ratio list
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// The validated t-values, in increasing order
    pub fn as_slice(&self) -> &[f64] {
        &self.ratios
    }

    /// Consecutive `(start, end)` parameter intervals covering [0, 1].
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let starts = std::iter::once(0.0).chain(self.ratios.iter().copied());
        let ends = self.ratios.iter().copied().chain(std::iter::once(1.0));
        starts.zip(ends)
    }
}

/// Split a line at every ratio.
///
/// Each interior point is the linear interpolation of the endpoints; the
/// final piece is anchored at `line.p1` so the original endpoint is
/// reproduced exactly. Identical endpoints yield valid zero-length pieces.
pub fn split_line_at(line: Line, ratios: &SplitRatios) -> Vec<Line> {
    let mut pieces = Vec::with_capacity(ratios.len() + 1);
    let mut start = line.p0;
    for &t in ratios.as_slice() {
        let end = line.p0.lerp(line.p1, t);
        pieces.push(Line::new(start, end));
        start = end;
    }
    pieces.push(Line::new(start, line.p1));
    pieces
}

/// Split a quadratic at every ratio, yielding one degree-2 piece per
/// interval.
pub fn split_quadratic_at(quad: QuadBez, ratios: &SplitRatios) -> Vec<QuadBez> {
    ratios.intervals().map(|(t0, t1)| quad.subsegment(t0..t1)).collect()
}

/// Split a cubic at every ratio, yielding one degree-3 piece per interval.
pub fn split_cubic_at(cubic: CubicBez, ratios: &SplitRatios) -> Vec<CubicBez> {
    ratios.intervals().map(|(t0, t1)| cubic.subsegment(t0..t1)).collect()
}

// ===== Splitting strategy =====

/// Strategy for replacing one segment with several of the same kind.
///
/// The rewrite pass calls exactly one method per qualifying segment.
/// Implementations must return sub-segments whose concatenation traces
/// the original curve in order, each piece starting where the previous
/// one ended.
pub trait SegmentSplitter {
    fn split_line(&self, line: Line) -> Vec<Line>;
    fn split_quadratic(&self, quad: QuadBez) -> Vec<QuadBez>;
    fn split_cubic(&self, cubic: CubicBez) -> Vec<CubicBez>;
}

/// The stock splitter: cuts every segment at one fixed set of ratios.
#[derive(Debug, Clone)]
pub struct RatioSplitter {
    ratios: SplitRatios,
}

impl RatioSplitter {
    pub fn new(ratios: SplitRatios) -> Self {
        Self { ratios }
    }

    pub fn ratios(&self) -> &SplitRatios {
        &self.ratios
    }
}

impl SegmentSplitter for RatioSplitter {
    fn split_line(&self, line: Line) -> Vec<Line> {
        split_line_at(line, &self.ratios)
    }

    fn split_quadratic(&self, quad: QuadBez) -> Vec<QuadBez> {
        split_quadratic_at(quad, &self.ratios)
    }

    fn split_cubic(&self, cubic: CubicBez) -> Vec<CubicBez> {
        split_cubic_at(cubic, &self.ratios)
    }
}
