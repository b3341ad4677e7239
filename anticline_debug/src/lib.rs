// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for anticline
//! diagnostics.
//!
//! Wire a [`PrettyPrintSink`](pretty::PrettyPrintSink) or a
//! [`RecorderSink`](recorder::RecorderSink) into a fold loop through
//! `anticline_core`'s [`Tracer`](anticline_core::trace::Tracer), then
//! export recordings as JSON with [`json::export`].

pub mod json;
pub mod pretty;
pub mod recorder;
