//! Data layer for the employee directory
//!
//! This module separates the immutable record store from the filtered,
//! sorted view the UI presents and exports.

pub mod columns;
pub mod data_exporter;
pub mod data_provider;
pub mod employee;
pub mod employee_view;
pub mod filter_pipeline;
