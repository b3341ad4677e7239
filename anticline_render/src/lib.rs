// Copyright 2026 the Anticline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fold-plan definitions and the compositor driver for anticline.
//!
//! `anticline_core` owns solved geometry and rewrites it in place on
//! every solve. Hosts that need to keep a frame's segments — or hand
//! them to a renderer on another layer of the stack — copy them into a
//! [`FoldPlan`](plan::FoldPlan). The [`composite`](composite::composite)
//! driver then walks a plan over any
//! [`Surface`](anticline_core::backend::Surface) in segment order.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod composite;
pub mod plan;
