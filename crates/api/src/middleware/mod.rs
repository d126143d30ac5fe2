//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `ADMIN` role.
//! - [`rbac::RequireEmpleador`] -- Requires the `EMPLEADOR` role.
//! - [`rbac::RequireEmpleado`] -- Requires the `EMPLEADO` role.

pub mod auth;
pub mod rbac;
