//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from host stores, ring rules and worker coordination so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use armoury_core::{ActorId, ItemId, RingError};

pub use crate::host::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A linked item could not be resolved. The work done before the lookup
    /// is described by `partial_summary`.
    #[error("item {item} could not be found")]
    ItemNotFound {
        item: String,
        partial_summary: String,
    },

    #[error("actor {0} could not be found")]
    ActorNotFound(ActorId),

    #[error("actor {actor} owns no item {item}")]
    UnknownItem { actor: ActorId, item: ItemId },

    /// The host failed to persist or delete a document. Never retried.
    #[error("host persistence failed")]
    Persistence(#[from] StoreError),

    #[error(transparent)]
    Ring(#[from] RingError),

    #[error("hook {hook} received an event it does not handle")]
    UnexpectedEvent { hook: &'static str },

    #[error("runtime requires {0} to be configured before building")]
    MissingPort(&'static str),

    #[error("dispatch worker command channel closed")]
    CommandChannelClosed,

    #[error("dispatch worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("dispatch worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
