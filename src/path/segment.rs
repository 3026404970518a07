// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Typed path segments between two on-curve anchors.
//!
//! A `Segment` is transient: the rewrite pass builds one from the current
//! point and the next command's points, asks a splitter for replacements,
//! and throws it away. Segments are never stored in the outline model.

use kurbo::{CubicBez, Line, ParamCurve, Point, QuadBez};

use super::split::{SplitError, SplitRatios, split_cubic_at, split_line_at, split_quadratic_at};

/// One drawing primitive between a start anchor and an end anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight line: start, end
    Line(Line),
    /// Quadratic Bezier: start, control, end
    Quadratic(QuadBez),
    /// Cubic Bezier: start, two controls, end
    Cubic(CubicBez),
}

impl Segment {
    /// Build a segment from an ordered control-point list.
    ///
    /// Two points make a line, three a quadratic, four a cubic. Any other
    /// arity is an unsupported degree and is reported, not ignored.
    pub fn from_control_points(points: &[Point]) -> Result<Self, SplitError> {
        match *points {
            [p0, p1] => Ok(Segment::Line(Line::new(p0, p1))),
            [p0, p1, p2] => Ok(Segment::Quadratic(QuadBez::new(p0, p1, p2))),
            [p0, p1, p2, p3] => Ok(Segment::Cubic(CubicBez::new(p0, p1, p2, p3))),
            _ => Err(SplitError::UnsupportedDegree(points.len())),
        }
    }

    /// The start anchor
    pub fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.p0,
            Segment::Quadratic(quad) => quad.p0,
            Segment::Cubic(cubic) => cubic.p0,
        }
    }

    /// The end anchor
    pub fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.p1,
            Segment::Quadratic(quad) => quad.p2,
            Segment::Cubic(cubic) => cubic.p3,
        }
    }

    /// Evaluate the segment at parameter `t` in [0, 1].
    pub fn eval(&self, t: f64) -> Point {
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Quadratic(quad) => quad.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    /// Split at every ratio, yielding sub-segments of the same kind whose
    /// concatenation traces this segment.
    pub fn split_at(&self, ratios: &SplitRatios) -> Vec<Segment> {
        match self {
            Segment::Line(line) => split_line_at(*line, ratios)
                .into_iter()
                .map(Segment::Line)
                .collect(),
            Segment::Quadratic(quad) => split_quadratic_at(*quad, ratios)
                .into_iter()
                .map(Segment::Quadratic)
                .collect(),
            Segment::Cubic(cubic) => split_cubic_at(*cubic, ratios)
                .into_iter()
                .map(Segment::Cubic)
                .collect(),
        }
    }
}
