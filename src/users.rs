// User collection service

use crate::error::{Error, Result};
use crate::models::{NewUser, User, UserPatch};
use crate::store::Store;
use tracing::debug;

/// CRUD operations over the user collection.
///
/// Every operation reloads the collection from the store, and mutating
/// operations write the whole collection back. Overlapping mutations are
/// not coordinated; see [`Store`].
#[derive(Debug, Clone)]
pub struct UserService {
    store: Store,
}

impl UserService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_all(&self) -> Result<Vec<User>> {
        self.store.load()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let users: Vec<User> = self.store.load()?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Create a user. Fails with [`Error::Conflict`] when the email is
    /// already taken (case-sensitive exact match); nothing is written in
    /// that case.
    pub fn create(&self, input: NewUser) -> Result<User> {
        let mut users: Vec<User> = self.store.load()?;

        if users.iter().any(|u| u.email == input.email) {
            return Err(Error::email_exists());
        }

        let user = User::new(input);
        debug!(id = %user.id, "creating user");
        users.push(user.clone());
        self.store.save(&users)?;

        Ok(user)
    }

    /// Apply a partial update to the user with the given id.
    ///
    /// Returns `Ok(None)` when no such user exists. Changing the email to
    /// one held by another user fails with [`Error::Conflict`]. In both
    /// cases nothing is written. The record keeps its position in the
    /// collection, so listing order is stable across updates.
    pub fn update(&self, id: &str, patch: UserPatch) -> Result<Option<User>> {
        let mut users: Vec<User> = self.store.load()?;

        let Some(index) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(email) = &patch.email
            && *email != users[index].email
            && users.iter().any(|u| u.email == *email)
        {
            return Err(Error::email_exists());
        }

        users[index].apply(patch);
        let user = users[index].clone();
        debug!(id = %user.id, "updating user");
        self.store.save(&users)?;

        Ok(Some(user))
    }

    /// Delete the user with the given id. Returns `false` without writing
    /// when nothing matched.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let users: Vec<User> = self.store.load()?;
        let initial_len = users.len();

        let remaining: Vec<User> = users.into_iter().filter(|u| u.id != id).collect();
        if remaining.len() == initial_len {
            return Ok(false);
        }

        debug!(id, "deleting user");
        self.store.save(&remaining)?;
        Ok(true)
    }

    /// First user with exactly this email, if any
    pub fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let users: Vec<User> = self.store.load()?;
        Ok(users.into_iter().find(|u| u.email == email))
    }
}
