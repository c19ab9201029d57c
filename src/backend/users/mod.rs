//! Users Module
//!
//! HTTP handlers for user CRUD and the per-user book and quote listings.
//! The user queries themselves live in `auth::users`.

pub mod handlers;
