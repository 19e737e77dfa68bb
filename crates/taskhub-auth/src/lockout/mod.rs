//! Failed-login tracking and temporary account lockout.

pub mod tracker;

pub use tracker::LockoutTracker;
