// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Glyph outline data model

pub mod outline;
pub mod pen;

pub use outline::{Outline, PathCommand};
pub use pen::OutlinePen;
