//! # Resource Actor
//!
//! Building blocks for type-safe, concurrent resource stores. Each resource type lives in
//! its own actor that owns the collection, processes requests one at a time, and writes every
//! accepted change through a [`Repository`](store::Repository) before making it visible.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules and lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and persistence.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication.
//! 4. **Store Layer** ([`store`]) - whole-collection snapshots over a shared [`Backend`].
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and processes messages **sequentially**, which
//!   makes every read-modify-write of its collection a single critical section.
//! - Actors coordinate through messages. An actor awaiting another actor inside a hook keeps
//!   its own mailbox parked, so the pair behaves like two locks taken in a fixed order.
//!   Keep the dependency graph acyclic.
//! - [`ResourceRequest::Transact`] applies several actions as one unit and commits them
//!   together with writes staged by another store, giving cross-store atomicity without
//!   shared mutable state.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at construction
//! time. Create every actor first, then start each one with the clients it needs.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, and
//! [`store::MemoryBackend`] replaces the file system. See the [`mock`] module for the
//! testing patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StoreError};
pub use message::{ResourceRequest, Response};
pub use store::{Backend, MemoryBackend, Repository, StagedWrite};
