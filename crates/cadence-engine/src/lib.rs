//! Cadence engine crate.
//!
//! Frame pacing for an opaque render client, plus the platform + GPU runtime
//! that hosts it.

pub mod core;
pub mod coords;
pub mod device;
pub mod error;
pub mod pacer;
pub mod time;
pub mod window;

pub mod logging;

pub use error::HostError;
