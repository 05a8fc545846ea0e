//! Management and configuration commands

pub mod config;
