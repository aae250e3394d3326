//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record store calls into use-case level APIs.
//! - Keep request handlers decoupled from storage details and from streak
//!   bookkeeping.

pub mod dashboard;
pub mod streak;
pub mod task_filter;
pub mod tracker_service;
