//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::AccessRequest;
use crate::error::RequestResult;

/// Access request repository trait
///
/// There is deliberately no update or delete.
#[trait_variant::make(AccessRequestRepository: Send)]
pub trait LocalAccessRequestRepository {
    /// Every stored request in insertion order; nothing stored yet is an empty list
    async fn find_all(&self) -> RequestResult<Vec<AccessRequest>>;

    /// Append one request and return it as stored.
    ///
    /// The stored id is unique and greater than every earlier id.
    async fn append(&self, request: AccessRequest) -> RequestResult<AccessRequest>;
}
