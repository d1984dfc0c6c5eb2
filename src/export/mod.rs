//! DDL generation
//!
//! Ties the pipeline together: sheet rows in, rendered CREATE TABLE
//! statements out.

pub mod sql;

pub use sql::DdlGenerator;
