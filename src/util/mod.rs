//! Shared utilities for the driver loop.

pub mod frame_timing;
