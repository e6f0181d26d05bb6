//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod cache_control;
pub mod clubs;
pub mod error;
pub mod health;
pub mod movies;
pub mod schemas;
pub mod state;

pub use crate::domain::ApiResult;
