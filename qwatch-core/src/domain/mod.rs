//! Core domain types
//!
//! This module contains the domain structures shared by the client, the
//! monitor and the CLI.

pub mod job;
pub mod queue;
