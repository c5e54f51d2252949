//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; subsystems emit events with fields,
//!   never format their own lines
//! - The library only emits; subscriber installation belongs to the binary
//!   (or the test harness) via logging::init

pub mod logging;
