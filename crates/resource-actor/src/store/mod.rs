//! # Store Layer
//!
//! Actors keep their collection in memory and write it through a [`Repository`] after every
//! successful mutation. Repositories turn a collection into a [`StagedWrite`] and hand it to a
//! shared [`Backend`], which publishes one or more staged writes atomically. Handing writes
//! that belong to *different* repositories to a single `commit` is how two stores change
//! together.

mod backend;
mod memory;
mod repository;

pub use backend::{Backend, StagedWrite};
pub use memory::MemoryBackend;
pub use repository::Repository;
