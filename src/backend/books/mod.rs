//! Books Module
//!
//! Book CRUD and the user-book association table.

pub mod db;
pub mod handlers;
