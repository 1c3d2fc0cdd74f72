//! Core types for the Tabula board containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate model shared by every board: [`Position`], [`Limits`] and the
//! [`inside_space`] predicate, together with the typed error taxonomy
//! ([`BoardError`]) that is the only failure contract of the containers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod position;

pub use error::{BoardError, ConfigError, IdErrorKind, PositionErrorKind};
pub use position::{inside_space, Limits, Position};
