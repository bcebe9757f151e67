//! Actix middleware used by the HTTP surface.

pub mod trace;
