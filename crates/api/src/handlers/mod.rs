//! Request handlers, one module per resource.
//!
//! Handlers extract and validate input, delegate to `crate::services`, and
//! wrap the result in the response envelope from `crate::response`.

pub mod auth;
pub mod catalogos;
pub mod perfiles;
pub mod postulaciones;
pub mod trabajos;
