// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Segment geometry and parametric splitting

pub mod segment;
pub mod split;

pub use segment::Segment;
pub use split::{
    RatioSplitter, SegmentSplitter, SplitError, SplitRatios, split_cubic_at, split_line_at,
    split_quadratic_at,
};
