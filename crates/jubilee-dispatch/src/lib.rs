//! # Jubilee Dispatch
//! The idempotency core: decide atomically whether a user's yearly
//! notification may proceed, and drive the daily batch.
//!
//! ## Flow
//! ```text
//! Dispatcher (one run per scheduling period)
//!   └── roster stream ── birthday match ── NotificationGate::admit ── send
//!                                            │
//!                                            └── one atomic claim in the
//!                                                shared sentinel store
//! ```
//!
//! The claim is committed before the sender runs. A crash between claim
//! and send loses at most one notification; it can never duplicate one.

pub mod gate;
pub mod runner;
pub mod summary;

pub use gate::NotificationGate;
pub use runner::{DispatchOptions, Dispatcher};
pub use summary::RunSummary;
