//! Wire-level models shared by the API and the persistence layer.
//!
//! The types in this module serialize field-for-field to the JSON documents
//! exchanged over HTTP and embedded in the store.

pub mod sport;
