// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lingo-Triage — Language-Pair Title Classification & Post State Tracking.
//!
//! This crate provides the core engine for triaging translation-request
//! posts. It reads a free-form post title, decides which languages the
//! request is from and to, and tracks the lifecycle of the post from
//! submission to translation.
//!
//! ENGINE PILLARS:
//! 1. **Registry**: An immutable catalog of ISO 639 languages, scripts,
//!    and ISO 3166 countries that every other component borrows.
//! 2. **Pipeline**: A deterministic normalize / extract / convert /
//!    disambiguate chain that turns a raw title into a classification.
//! 3. **State**: A versioned record of each post (status, flair text,
//!    history) with strictly monotonic "translated" transitions.

pub mod convert;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod state;
pub mod storage;
pub mod types;
