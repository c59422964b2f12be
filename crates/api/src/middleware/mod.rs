//! Request extractors that run before a handler body.
//!
//! - [`auth::AuthUser`] -- the authenticated identity from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`validation`] -- JSON body, path, and query extractors that reject with
//!   itemized field errors.

pub mod auth;
pub mod rbac;
pub mod validation;
