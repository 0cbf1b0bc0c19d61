//! Talentboard core library.
//!
//! Houses the job-portal domain model and the PDS (Personal Data Sheet)
//! scoring engine: rubric configuration, override resolution, weighted
//! scoring, and the breakdown records persisted onto applications. The HTTP
//! surface in `services/api` is a thin shell over the service layer exposed
//! here.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
