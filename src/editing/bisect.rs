// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Selective rewrite pass: split the fully-selected segments of an
//! outline and pass everything else through.
//!
//! The pass walks an outline command-by-command, tracking the current
//! point and the first point of the open contour. A segment qualifies
//! only when BOTH of its on-curve endpoints are in the selection; a
//! qualifying segment is replaced by the splitter's sub-segments, every
//! other command is emitted unchanged, preserving command order and
//! contour structure. Membership is tested against the original segment
//! endpoints only, so splits never chain within one pass.
//!
//! The closing edge of a closed contour participates too: close-path
//! behaves like a line back to the contour's first point, and when that
//! edge qualifies its interior split points are emitted before the close
//! marker.

use kurbo::{CubicBez, Line, Point, QuadBez};
use thiserror::Error;

use crate::model::{Outline, OutlinePen, PathCommand};
use crate::path::{RatioSplitter, SegmentSplitter, SplitError, SplitRatios};

use super::selection::Selection;

/// Failures of the rewrite pass.
///
/// An empty outline or an empty selection is not a failure; both produce
/// a pass-through copy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RewriteError {
    /// Invalid split ratios
    #[error(transparent)]
    Split(#[from] SplitError),
    /// A drawing or closing command arrived before any move-to
    #[error("{0} command with no open contour")]
    NoOpenContour(&'static str),
    /// A move-to arrived while a contour was still open, or the outline
    /// ended without terminating its last contour
    #[error("contour was not terminated with close-path or end-path")]
    UnterminatedContour,
}

/// Rewrite `source`, splitting every fully-selected segment at `ratios`.
///
/// Ratios are validated first (each strictly inside (0, 1), strictly
/// increasing); the terminal 1.0 is implicit. Returns a new outline,
/// `source` is never modified. With an empty selection the result is
/// command-for-command identical to the input.
pub fn rewrite_outline(
    source: &Outline,
    selection: &Selection,
    ratios: &[f64],
) -> Result<Outline, RewriteError> {
    let ratios = SplitRatios::new(ratios.iter().copied())?;
    let splitter = RatioSplitter::new(ratios);
    let mut output = Outline::new();
    rewrite_outline_into(source, selection, &splitter, &mut output)?;
    Ok(output)
}

/// Rewrite `source` into a caller-supplied pen, using any splitting
/// strategy.
///
/// The outline structure is validated before the first pen call, so on
/// error the pen has not been written to at all.
pub fn rewrite_outline_into<S, P>(
    source: &Outline,
    selection: &Selection,
    splitter: &S,
    pen: &mut P,
) -> Result<(), RewriteError>
where
    S: SegmentSplitter,
    P: OutlinePen,
{
    validate(source.commands())?;

    let mut pass = RewritePass {
        selection,
        splitter,
        pen,
        current: None,
        first: None,
        segments: 0,
        splits: 0,
    };
    for command in source.commands() {
        pass.apply(command);
    }
    tracing::debug!(
        "rewrote outline: split {} of {} segments",
        pass.splits,
        pass.segments
    );
    Ok(())
}

/// Check contour structure without emitting anything.
fn validate(commands: &[PathCommand]) -> Result<(), RewriteError> {
    let mut open = false;
    for command in commands {
        match command {
            PathCommand::MoveTo(_) => {
                if open {
                    return Err(RewriteError::UnterminatedContour);
                }
                open = true;
            }
            PathCommand::LineTo(_) => {
                if !open {
                    return Err(RewriteError::NoOpenContour("line-to"));
                }
            }
            PathCommand::QuadTo(..) => {
                if !open {
                    return Err(RewriteError::NoOpenContour("quad-to"));
                }
            }
            PathCommand::CurveTo(..) => {
                if !open {
                    return Err(RewriteError::NoOpenContour("curve-to"));
                }
            }
            PathCommand::ClosePath => {
                if !open {
                    return Err(RewriteError::NoOpenContour("close-path"));
                }
                open = false;
            }
            PathCommand::EndPath => {
                if !open {
                    return Err(RewriteError::NoOpenContour("end-path"));
                }
                open = false;
            }
            PathCommand::AddComponent { .. } => {}
        }
    }
    if open {
        return Err(RewriteError::UnterminatedContour);
    }
    Ok(())
}

/// Traversal state for one rewrite.
struct RewritePass<'a, S, P> {
    selection: &'a Selection,
    splitter: &'a S,
    pen: &'a mut P,
    /// Last emitted on-curve point of the open contour
    current: Option<Point>,
    /// First point of the open contour, target of the closing edge
    first: Option<Point>,
    segments: usize,
    splits: usize,
}

impl<S: SegmentSplitter, P: OutlinePen> RewritePass<'_, S, P> {
    fn apply(&mut self, command: &PathCommand) {
        match command {
            PathCommand::MoveTo(pt) => {
                self.pen.move_to(*pt);
                self.current = Some(*pt);
                self.first = Some(*pt);
            }
            PathCommand::LineTo(pt) => self.line_to(*pt),
            PathCommand::QuadTo(ctrl, end) => self.quad_to(*ctrl, *end),
            PathCommand::CurveTo(c1, c2, end) => self.curve_to(*c1, *c2, *end),
            PathCommand::ClosePath => self.close_path(),
            PathCommand::EndPath => {
                self.pen.end_path();
                self.current = None;
                self.first = None;
            }
            PathCommand::AddComponent { base, transform } => {
                // unaffected by selection logic
                self.pen.add_component(base, *transform);
            }
        }
    }

    fn qualifies(&self, start: Point, end: Point) -> bool {
        self.selection.contains(start) && self.selection.contains(end)
    }

    fn line_to(&mut self, pt: Point) {
        // validate() ran before replay, so a contour is open here
        let Some(current) = self.current else { return };
        self.segments += 1;

        if self.qualifies(current, pt) {
            for piece in self.splitter.split_line(Line::new(current, pt)) {
                self.pen.line_to(piece.p1);
            }
            self.splits += 1;
        } else {
            self.pen.line_to(pt);
        }
        self.current = Some(pt);
    }

    fn quad_to(&mut self, ctrl: Point, end: Point) {
        let Some(current) = self.current else { return };
        self.segments += 1;

        if self.qualifies(current, end) {
            let pieces = self.splitter.split_quadratic(QuadBez::new(current, ctrl, end));
            for piece in pieces {
                self.pen.quad_to(piece.p1, piece.p2);
            }
            self.splits += 1;
        } else {
            self.pen.quad_to(ctrl, end);
        }
        self.current = Some(end);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, end: Point) {
        let Some(current) = self.current else { return };
        self.segments += 1;

        if self.qualifies(current, end) {
            let pieces = self
                .splitter
                .split_cubic(CubicBez::new(current, c1, c2, end));
            for piece in pieces {
                self.pen.curve_to(piece.p1, piece.p2, piece.p3);
            }
            self.splits += 1;
        } else {
            self.pen.curve_to(c1, c2, end);
        }
        self.current = Some(end);
    }

    fn close_path(&mut self) {
        // The closing edge back to the contour start is a real segment.
        // Its terminal point stays implicit in the close marker, so a
        // qualifying edge contributes only its interior split points and
        // a non-qualifying close passes through untouched.
        if let (Some(current), Some(first)) = (self.current, self.first) {
            self.segments += 1;
            if self.qualifies(current, first) {
                let pieces = self.splitter.split_line(Line::new(current, first));
                if let Some((_, interior)) = pieces.split_last() {
                    for piece in interior {
                        self.pen.line_to(piece.p1);
                    }
                }
                self.splits += 1;
            }
        }
        self.pen.close_path();
        self.current = None;
        self.first = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Affine;

    /// Closed unit-ish square: corners a(0,0) b(100,0) c(100,100) d(0,100),
    /// with the d->a edge implicit in close-path.
    fn square() -> Outline {
        let mut outline = Outline::new();
        outline.move_to(Point::new(0.0, 0.0));
        outline.line_to(Point::new(100.0, 0.0));
        outline.line_to(Point::new(100.0, 100.0));
        outline.line_to(Point::new(0.0, 100.0));
        outline.close_path();
        outline
    }

    fn corners() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ]
    }

    #[test]
    fn empty_selection_is_identity() {
        // mix in a curve, an open contour, and a component
        let mut outline = square();
        outline.move_to(Point::new(200.0, 0.0));
        outline.curve_to(
            Point::new(230.0, 40.0),
            Point::new(270.0, 40.0),
            Point::new(300.0, 0.0),
        );
        outline.quad_to(Point::new(320.0, -20.0), Point::new(340.0, 0.0));
        outline.end_path();
        outline.add_component("grave", Affine::translate((120.0, 300.0)));

        let rewritten = rewrite_outline(&outline, &Selection::new(), &[0.5]).unwrap();
        assert_eq!(rewritten, outline);
    }

    #[test]
    fn square_with_all_corners_selected() {
        let selection: Selection = corners().into_iter().collect();
        let rewritten = rewrite_outline(&square(), &selection, &[0.5]).unwrap();

        // a midpoint lands between every pair of adjacent corners,
        // closing edge included
        let points = rewritten.on_curve_points();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(100.0, 100.0),
                Point::new(50.0, 100.0),
                Point::new(0.0, 100.0),
                Point::new(0.0, 50.0),
            ]
        );
        assert_eq!(rewritten.commands().last(), Some(&PathCommand::ClosePath));
    }

    #[test]
    fn square_with_two_corners_selected() {
        // only the b->c edge has both endpoints selected
        let [_, b, c, _] = corners();
        let selection: Selection = [b, c].into_iter().collect();
        let rewritten = rewrite_outline(&square(), &selection, &[0.5]).unwrap();

        assert_eq!(
            rewritten.commands(),
            &[
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(100.0, 0.0)),
                PathCommand::LineTo(Point::new(100.0, 50.0)),
                PathCommand::LineTo(Point::new(100.0, 100.0)),
                PathCommand::LineTo(Point::new(0.0, 100.0)),
                PathCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn one_selected_endpoint_passes_through() {
        let mut outline = Outline::new();
        outline.move_to(Point::new(50.0, 50.0));
        outline.line_to(Point::new(200.0, 20.0));
        outline.end_path();

        let selection: Selection = [Point::new(50.0, 50.0)].into_iter().collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();
        assert_eq!(rewritten, outline);
    }

    #[test]
    fn selected_line_bisects() {
        let mut outline = Outline::new();
        outline.move_to(Point::new(50.0, 50.0));
        outline.line_to(Point::new(200.0, 20.0));
        outline.end_path();

        let selection: Selection = [Point::new(50.0, 50.0), Point::new(200.0, 20.0)]
            .into_iter()
            .collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();

        assert_eq!(
            rewritten.commands(),
            &[
                PathCommand::MoveTo(Point::new(50.0, 50.0)),
                PathCommand::LineTo(Point::new(125.0, 35.0)),
                PathCommand::LineTo(Point::new(200.0, 20.0)),
                PathCommand::EndPath,
            ]
        );
    }

    #[test]
    fn selected_cubic_splits_into_two_curves() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(100.0, 0.0);
        let cubic = CubicBez::new(start, Point::new(30.0, 80.0), Point::new(70.0, 80.0), end);

        let mut outline = Outline::new();
        outline.move_to(start);
        outline.curve_to(cubic.p1, cubic.p2, end);
        outline.end_path();

        let selection: Selection = [start, end].into_iter().collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();

        let commands = rewritten.commands();
        assert_eq!(commands.len(), 4);
        let (first_end, second) = match (&commands[1], &commands[2]) {
            (PathCommand::CurveTo(_, _, mid), PathCommand::CurveTo(c1, c2, last)) => {
                (*mid, CubicBez::new(*mid, *c1, *c2, *last))
            }
            other => panic!("expected two curve-to commands, got {other:?}"),
        };

        // pieces trace the original curve
        use kurbo::ParamCurve;
        assert_eq!(first_end, cubic.eval(0.5));
        assert_eq!(second.p3, end);
        for step in 0..=20 {
            let t = step as f64 / 20.0;
            let expected = cubic.eval(0.5 + t / 2.0);
            let actual = second.eval(t);
            assert!((expected - actual).hypot() < 1e-9);
        }
    }

    #[test]
    fn selected_quadratic_splits_into_two_quads() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(100.0, 0.0);

        let mut outline = Outline::new();
        outline.move_to(start);
        outline.quad_to(Point::new(50.0, 60.0), end);
        outline.end_path();

        let selection: Selection = [start, end].into_iter().collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();

        let commands = rewritten.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[1], PathCommand::QuadTo(..)));
        assert!(matches!(commands[2], PathCommand::QuadTo(..)));
        if let PathCommand::QuadTo(_, last) = commands[2] {
            assert_eq!(last, end);
        }
    }

    #[test]
    fn closing_edge_splits_on_triangle() {
        // closing edge c->a is implicit in close-path
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        let c = Point::new(50.0, 80.0);
        let mut outline = Outline::new();
        outline.move_to(a);
        outline.line_to(b);
        outline.line_to(c);
        outline.close_path();

        let selection: Selection = [c, a].into_iter().collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();

        assert_eq!(
            rewritten.commands(),
            &[
                PathCommand::MoveTo(a),
                PathCommand::LineTo(b),
                PathCommand::LineTo(c),
                PathCommand::LineTo(Point::new(25.0, 40.0)),
                PathCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn multiple_ratios_insert_multiple_points() {
        let mut outline = Outline::new();
        outline.move_to(Point::new(0.0, 0.0));
        outline.line_to(Point::new(100.0, 0.0));
        outline.end_path();

        let selection: Selection = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)]
            .into_iter()
            .collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.25, 0.5, 0.75]).unwrap();

        assert_eq!(rewritten.on_curve_points().len(), 5);
    }

    #[test]
    fn component_passes_through_verbatim() {
        let transform = Affine::new([0.5, 0.0, 0.0, 0.5, 40.0, -12.0]);
        let mut outline = Outline::new();
        outline.add_component("acutecomb", transform);

        let selection: Selection = [Point::new(40.0, -12.0)].into_iter().collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();
        assert_eq!(
            rewritten.commands(),
            &[PathCommand::AddComponent {
                base: "acutecomb".to_string(),
                transform,
            }]
        );
    }

    #[test]
    fn empty_outline_produces_no_commands() {
        let rewritten = rewrite_outline(&Outline::new(), &Selection::new(), &[0.5]).unwrap();
        assert!(rewritten.is_empty());
    }

    #[test]
    fn invalid_ratios_are_rejected() {
        let result = rewrite_outline(&square(), &Selection::new(), &[]);
        assert_eq!(result, Err(RewriteError::Split(SplitError::EmptyRatios)));

        let result = rewrite_outline(&square(), &Selection::new(), &[1.5]);
        assert_eq!(
            result,
            Err(RewriteError::Split(SplitError::RatioOutOfRange(1.5)))
        );
    }

    #[test]
    fn drawing_before_move_is_rejected() {
        let outline = Outline::from_commands(vec![PathCommand::LineTo(Point::new(1.0, 1.0))]);
        let result = rewrite_outline(&outline, &Selection::new(), &[0.5]);
        assert_eq!(result, Err(RewriteError::NoOpenContour("line-to")));
    }

    #[test]
    fn unterminated_contour_is_rejected() {
        let outline = Outline::from_commands(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            PathCommand::MoveTo(Point::new(20.0, 0.0)),
        ]);
        let result = rewrite_outline(&outline, &Selection::new(), &[0.5]);
        assert_eq!(result, Err(RewriteError::UnterminatedContour));

        let trailing = Outline::from_commands(vec![PathCommand::MoveTo(Point::new(0.0, 0.0))]);
        let result = rewrite_outline(&trailing, &Selection::new(), &[0.5]);
        assert_eq!(result, Err(RewriteError::UnterminatedContour));
    }

    #[test]
    fn error_leaves_pen_untouched() {
        let outline = Outline::from_commands(vec![
            PathCommand::MoveTo(Point::new(0.0, 0.0)),
            PathCommand::LineTo(Point::new(10.0, 0.0)),
            // missing close/end
        ]);
        let splitter = RatioSplitter::new(SplitRatios::midpoint());
        let mut pen = Outline::new();
        let result = rewrite_outline_into(&outline, &Selection::new(), &splitter, &mut pen);

        assert!(result.is_err());
        assert!(pen.is_empty());
    }

    #[test]
    fn degenerate_closed_contour_still_splits() {
        // contour that explicitly returns to its start before closing:
        // the closing edge is zero-length but still attempts the split
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let mut outline = Outline::new();
        outline.move_to(a);
        outline.line_to(b);
        outline.line_to(a);
        outline.close_path();

        let selection: Selection = [a].into_iter().collect();
        let rewritten = rewrite_outline(&outline, &selection, &[0.5]).unwrap();

        // zero-length closing edge a->a qualifies; its interior point is a
        assert_eq!(
            rewritten.commands(),
            &[
                PathCommand::MoveTo(a),
                PathCommand::LineTo(b),
                PathCommand::LineTo(a),
                PathCommand::LineTo(a),
                PathCommand::ClosePath,
            ]
        );
    }
}
