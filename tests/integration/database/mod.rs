//! Database schema tests

mod migrations_test;
