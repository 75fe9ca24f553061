//! Time subsystem.
//!
//! Provides a testable fixed-interval timer without coupling to the runtime.
//! Intended usage:
//! - the runtime owns one `Ticker` and parks the event loop until its deadline
//! - each `poll()` that fires yields a `Tick` delivered to `App::on_tick`

mod ticker;

pub use ticker::{Tick, Ticker};
