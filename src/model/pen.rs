// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Output interface for rebuilt outlines.
//!
//! `OutlinePen` is the callback surface the rewrite pass emits into: one
//! method per path command, called in drawing order. The crate's own
//! [`Outline`](super::Outline) implements it, so the common case needs no
//! custom sink; a host that wants to build straight into its own glyph
//! representation implements the trait instead.

use kurbo::{Affine, Point};

/// Receiver for path commands in drawing order.
///
/// Methods are infallible: a pen only records what it is told. Structural
/// validity (a move-to before any drawing command, terminated contours) is
/// the producer's responsibility; the rewrite pass checks it before
/// emitting anything.
pub trait OutlinePen {
    /// Begin a new contour at `pt`.
    fn move_to(&mut self, pt: Point);

    /// Draw a straight line from the current point to `pt`.
    fn line_to(&mut self, pt: Point);

    /// Draw a quadratic Bezier to `end` with control point `ctrl`.
    fn quad_to(&mut self, ctrl: Point, end: Point);

    /// Draw a cubic Bezier to `end` with control points `c1` and `c2`.
    fn curve_to(&mut self, c1: Point, c2: Point, end: Point);

    /// Close the current contour.
    fn close_path(&mut self);

    /// Terminate the current contour without closing it.
    fn end_path(&mut self);

    /// Reference another glyph by name, placed through `transform`.
    fn add_component(&mut self, base: &str, transform: Affine);
}
