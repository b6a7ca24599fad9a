//! HTTP request handlers.
//!
//! Controllers validate path parameters and bodies, dispatch the domain call
//! through `SportsService::dispatch`, and translate the outcome into the
//! route's status code and body.

pub mod sport;
