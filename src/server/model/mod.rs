//! Server-side domain models and conversions.
//!
//! This module contains the types the service layer works with beyond the wire
//! models in `crate::model`: lookup results and the conversions between stored
//! entity models and domain models, applied at the repository boundary.

pub mod sport;
