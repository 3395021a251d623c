// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The tracking catalogue, grouped by event family.
//!
//! Event name strings and property keys are consumed by downstream
//! dashboards and are part of the external contract. Several call sites
//! intentionally emit a legacy event (marked `DEPRECATED`) alongside the
//! current name while the vocabulary migration is in flight; the
//! duplication is load-bearing, not cleanup fodder.

mod app;
mod auth;
mod checkout;
mod comments;
mod dashboard;
mod discovery;
mod messages;
mod project;
mod settings;
mod social;
