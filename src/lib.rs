//! Groove Engine
//!
//! This crate provides the scheduling and scoring calculations behind a
//! workforce-management dashboard: expanding recurring shift templates into
//! concrete shifts, and blending weekly per-location performance metrics
//! into a single weighted Groove Score.

#![warn(missing_docs)]

pub mod access;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
