//! Time subsystem.
//!
//! Provides millisecond timestamps for the frame pacer without coupling it to
//! the runtime. Intended usage:
//! - one `SystemClock` per window (or per loop)
//! - `ManualClock` wherever timestamps must be scripted (tests, replays)

mod clock;

pub use clock::{Clock, FrameTime, ManualClock, SystemClock};
