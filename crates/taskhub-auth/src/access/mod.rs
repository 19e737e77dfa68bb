//! Role- and ownership-based access decisions.

pub mod enforcer;

pub use enforcer::AccessEnforcer;
