//! REST remote store
//!
//! `RemoteStore` performs single-attempt HTTP calls against the backend and
//! normalizes every failure into a `RepositoryError`. The repositories in
//! `repositories` implement the domain traits on top of it.

mod client;
pub mod dto;
mod operation;
pub mod repositories;

pub use client::*;
pub use operation::*;
