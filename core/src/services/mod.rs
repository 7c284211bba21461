//! Business services

pub mod verification;
