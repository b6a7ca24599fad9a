//! Request authentication and session access.
//!
//! - `auth` - Basic credential decoding, `AuthGuard` and the `require_auth` middleware
//! - `session` - Typed accessors for session data

pub mod auth;
pub mod session;
