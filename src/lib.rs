//! Simulated payment gateway for the NyayEase platform.
//!
//! Stands in for the real payment processor while it does not exist yet:
//! every operation waits a fixed simulated latency and resolves with a
//! descriptive value object.

pub mod domain;
pub mod infrastructure;
pub mod use_cases;
