/// Scan comparison domain - pure business logic
///
/// This module contains the domain model for scan exports and the
/// normalization and diffing services. It has no I/O dependencies.
pub mod domain;
pub mod services;
