//! qwatch Core
//!
//! Core types and abstractions for watching jobs on remote backends.
//!
//! This crate contains:
//! - Domain types: jobs, statuses and queue information
//! - DTOs: payloads exchanged with the backend API
//! - The `JobHandle` trait the monitor polls through
//! - Duration decomposition used for wait-time estimates

pub mod domain;
pub mod dto;
pub mod duration;
pub mod handle;
