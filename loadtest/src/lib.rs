//! Constant-arrival-rate load test for the auth service login endpoint.
//!
//! The traffic profile lives in [`profile::LoadProfile`], the per-iteration
//! request and its checks in [`login`], and the pass/fail bookkeeping in
//! [`checks`]. Pacing, concurrency scaling and latency measurement are all
//! handled by the balter engine; this crate only tells it what one
//! iteration looks like and how fast to run them.

pub mod checks;
pub mod login;
pub mod profile;

pub use checks::Check;
pub use login::{login_scenario, LoginChecks, LoginRequest};
pub use profile::LoadProfile;
