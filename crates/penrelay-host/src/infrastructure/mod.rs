//! Infrastructure: pointer driver implementations and configuration loading.

pub mod config;
pub mod pointer;
