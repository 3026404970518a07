// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph Bisect: selective Bezier segment bisection for glyph outlines
//!
//! Given an outline described as pen-style path commands, a set of
//! selected on-curve points, and one or more parametric split ratios,
//! this crate rewrites the outline so that every segment whose both
//! endpoints are selected is replaced by sub-segments meeting at new
//! on-curve points. Everything else passes through untouched, so the
//! rewritten outline traces exactly the same shape. Splitting the host
//! glyph's contours, capturing the selection, and recording undo are the
//! host's job; the engine is pure and synchronous.
//!
//! ```
//! use glyph_bisect::{Outline, OutlinePen, Selection, rewrite_outline};
//! use kurbo::Point;
//!
//! let mut outline = Outline::new();
//! outline.move_to(Point::new(50.0, 50.0));
//! outline.line_to(Point::new(200.0, 20.0));
//! outline.end_path();
//!
//! let selection: Selection = [Point::new(50.0, 50.0), Point::new(200.0, 20.0)]
//!     .into_iter()
//!     .collect();
//!
//! let split = rewrite_outline(&outline, &selection, &[0.5]).unwrap();
//! assert_eq!(
//!     split.on_curve_points(),
//!     vec![
//!         Point::new(50.0, 50.0),
//!         Point::new(125.0, 35.0),
//!         Point::new(200.0, 20.0),
//!     ]
//! );
//! ```

pub mod editing;
pub mod model;
pub mod path;

pub use editing::{RewriteError, Selection, rewrite_outline, rewrite_outline_into};
pub use model::{Outline, OutlinePen, PathCommand};
pub use path::{RatioSplitter, Segment, SegmentSplitter, SplitError, SplitRatios};
