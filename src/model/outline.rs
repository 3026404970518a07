// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Outline data model, the command-sequence representation of a glyph.
//!
//! An `Outline` is an ordered list of pen-style `PathCommand`s describing
//! zero or more contours plus any component references. Coordinates are
//! carried un-transformed; components carry a `kurbo::Affine` that is
//! passed through verbatim. Each contour begins with exactly one move-to
//! and is terminated by close-path (closed) or end-path (open).

use kurbo::{Affine, BezPath, Point};

use super::pen::OutlinePen;

/// One drawing command in an outline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    /// Begin a new contour at the anchor
    MoveTo(Point),
    /// Straight segment to the anchor
    LineTo(Point),
    /// Quadratic segment: control point, then anchor
    QuadTo(Point, Point),
    /// Cubic segment: two control points, then anchor
    CurveTo(Point, Point, Point),
    /// Close the current contour
    ClosePath,
    /// Terminate the current contour, leaving it open
    EndPath,
    /// Reference to another glyph, placed through an affine transform
    AddComponent { base: String, transform: Affine },
}

/// An ordered sequence of path commands describing a glyph outline.
///
/// `Outline` doubles as the stock output builder: it implements
/// [`OutlinePen`], so the rewrite pass can write a fresh outline directly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    /// Create a new empty outline
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an outline from an existing command list
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// The commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if the outline holds no commands at all
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Feed every command to `pen`, in order.
    pub fn replay<P: OutlinePen>(&self, pen: &mut P) {
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(pt) => pen.move_to(*pt),
                PathCommand::LineTo(pt) => pen.line_to(*pt),
                PathCommand::QuadTo(ctrl, end) => pen.quad_to(*ctrl, *end),
                PathCommand::CurveTo(c1, c2, end) => pen.curve_to(*c1, *c2, *end),
                PathCommand::ClosePath => pen.close_path(),
                PathCommand::EndPath => pen.end_path(),
                PathCommand::AddComponent { base, transform } => {
                    pen.add_component(base, *transform)
                }
            }
        }
    }

    /// The on-curve anchor points, in drawing order.
    ///
    /// This is the coordinate list a host captures a selection from:
    /// move-to and line-to anchors plus the endpoints of curve segments.
    /// Off-curve control points are not included.
    pub fn on_curve_points(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PathCommand::MoveTo(pt) | PathCommand::LineTo(pt) => Some(*pt),
                PathCommand::QuadTo(_, end) => Some(*end),
                PathCommand::CurveTo(_, _, end) => Some(*end),
                PathCommand::ClosePath
                | PathCommand::EndPath
                | PathCommand::AddComponent { .. } => None,
            })
            .collect()
    }

    /// Convert the contours to a kurbo `BezPath`.
    ///
    /// Component references are skipped; they reference geometry owned by
    /// other glyphs and are rendered separately by the host. End-path has
    /// no `BezPath` equivalent, an open contour simply stops.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(pt) => path.move_to(*pt),
                PathCommand::LineTo(pt) => path.line_to(*pt),
                PathCommand::QuadTo(ctrl, end) => path.quad_to(*ctrl, *end),
                PathCommand::CurveTo(c1, c2, end) => path.curve_to(*c1, *c2, *end),
                PathCommand::ClosePath => path.close_path(),
                PathCommand::EndPath | PathCommand::AddComponent { .. } => {}
            }
        }
        path
    }
}

impl OutlinePen for Outline {
    fn move_to(&mut self, pt: Point) {
        self.commands.push(PathCommand::MoveTo(pt));
    }

    fn line_to(&mut self, pt: Point) {
        self.commands.push(PathCommand::LineTo(pt));
    }

    fn quad_to(&mut self, ctrl: Point, end: Point) {
        self.commands.push(PathCommand::QuadTo(ctrl, end));
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        self.commands.push(PathCommand::CurveTo(c1, c2, end));
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    fn end_path(&mut self) {
        self.commands.push(PathCommand::EndPath);
    }

    fn add_component(&mut self, base: &str, transform: Affine) {
        self.commands.push(PathCommand::AddComponent {
            base: base.to_string(),
            transform,
        });
    }
}
