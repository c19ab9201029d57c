//! Property-based tests

mod favorite_proptest;
