//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::store::StagedWrite;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to standard CRUD operations plus two extension points:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get / List**: Read one resource by ID, or the whole collection in stored order.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
/// - **Action**: Executes a custom [`ActorEntity::Action`] on one resource.
/// - **Transact**: Executes several actions, possibly on different resources, as one unit.
///   Either every action succeeds and the new collection is committed together with the
///   `companions` (writes staged by another store), or nothing changes.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Transact {
        actions: Vec<(T::Id, T::Action)>,
        companions: Vec<StagedWrite>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
}
