use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// The Store contract: the whole library is read and rewritten wholesale. There
// is no keyed access; insertion order in the slice is the persisted order.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // load the full sequence, an empty sequence if no storage exists yet
    async fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replace the stored sequence with the given one; a subsequent load must
    // observe either the previous or the new sequence, never a partial write
    async fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    File,
    Memory,
}
