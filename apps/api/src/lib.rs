//! Resume editor validation service.
//!
//! [`validation`] holds the schema registry used in-process by the editor,
//! persistence and generation code; [`routes`] exposes the same schemas over
//! HTTP.

pub mod config;
pub mod errors;
pub mod routes;
pub mod validation;
