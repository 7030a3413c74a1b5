//! In-memory employee registry: a validated roster of employee records with
//! filtered queries and rule-driven leave and promotion workflows, served
//! over HTTP by the `services/api` binary.

pub mod config;
pub mod directory;
pub mod error;
pub mod telemetry;
