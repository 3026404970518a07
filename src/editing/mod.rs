// Copyright 2026 the Glyph Bisect Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection model and the selective rewrite pass

pub mod bisect;
pub mod selection;

pub use bisect::{RewriteError, rewrite_outline, rewrite_outline_into};
pub use selection::Selection;
