//! Request middleware for trace correlation.

pub mod trace;

pub use trace::Trace;
