//! Runtime wiring
//!
//! This module connects the pure core to the outside world:
//! - `Runtime`: message queues, update loop and command execution
//! - `AppRunner`: terminal event loop and rendering

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
