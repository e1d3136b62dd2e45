use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{Local, Months};
use uuid::Uuid;

use crate::domain::{
    entity::{
        user::{User, UserState},
        Entity,
    },
    repository::{AlreadyExists, UserStore},
};

/// Volatile user storage over a plain hash map.
///
/// Mutual exclusion is left to the caller, see [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: HashMap<Uuid, User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store preloaded with `count` demo users, named `User {i}`
    /// and born `i` years ago.
    pub fn seeded(count: usize) -> Self {
        let today = Local::now().date_naive();
        let mut store = Self::new();

        for i in 1..=count {
            let birth_date = today
                .checked_sub_months(Months::new(12 * i as u32))
                .expect("Expect seed birth date in the calendar range");
            let user = User::new(UserState::new(format!("User {i}"), birth_date));
            store.set(user);
        }

        store
    }
}

impl UserStore for MemoryUserStore {
    fn put(&mut self, user: User) -> Result<(), AlreadyExists> {
        match self.users.entry(user.ident()) {
            Entry::Occupied(entry) => Err(AlreadyExists(*entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(user);
                Ok(())
            }
        }
    }

    fn get(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    fn get_all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    fn set(&mut self, user: User) {
        self.users.insert(user.ident(), user);
    }

    fn delete(&mut self, id: Uuid) -> bool {
        self.users.remove(&id).is_some()
    }
}
