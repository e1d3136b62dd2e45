use derive_more::Display;
use uuid::Uuid;

use super::entity::user::User;

/// Attempt to insert a user under an id already present in the store.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "user {_0} already stored")]
pub struct AlreadyExists(pub Uuid);

impl std::error::Error for AlreadyExists {}

/// Identifier keyed storage of user records.
///
/// Operations are synchronous in-memory map accesses. Callers own the locking
/// around compound operations (lookup then mutate).
pub trait UserStore {
    /// Inserts a user only if its id is not taken.
    fn put(&mut self, user: User) -> Result<(), AlreadyExists>;

    /// Returns the user stored under `id`.
    fn get(&self, id: Uuid) -> Option<&User>;

    /// Returns every stored user. Order is not significant.
    fn get_all(&self) -> Vec<User>;

    /// Writes a user under its id, inserting or overwriting.
    fn set(&mut self, user: User);

    /// Removes the user stored under `id`, reporting whether one was present.
    fn delete(&mut self, id: Uuid) -> bool;
}
