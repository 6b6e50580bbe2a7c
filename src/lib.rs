//! Scrivano is the form-state core of an authentication-gated blog admin
//! panel: slug derivation, declarative field validation, an explicit form
//! state machine, and a submission pipeline.
//!
//! The crate owns no I/O of its own. Identity, persistence, upload storage,
//! navigation, and user notices are all narrow traits in
//! [`application::gateways`] that the surrounding application implements;
//! the core only orchestrates them. Two reference adapters ship with the
//! crate: an in-memory posts store ([`infra::memory`]) and a
//! filesystem-backed upload store ([`infra::uploads`]).

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
