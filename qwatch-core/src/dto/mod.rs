//! Data Transfer Objects exchanged with the job backend
//!
//! Lightweight representations of domain entities shaped for the HTTP API.

pub mod job;
