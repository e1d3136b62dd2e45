use chrono::NaiveDate;
use uuid::Uuid;

use crate::base::resource_id;

use super::{state_ref, Entity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserState {
    pub(in crate::domain) name: String,
    pub(in crate::domain) birth_date: NaiveDate,
}

impl UserState {
    pub fn new(name: String, birth_date: NaiveDate) -> Self {
        Self { name, birth_date }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    state: UserState,
}

resource_id!(User, "user::User");

impl Entity for User {
    fn ident(&self) -> Uuid {
        self.id
    }
}

impl User {
    state_ref!(name, String);
    state_ref!(birth_date, NaiveDate);

    /// Creates a user under a freshly generated id.
    pub fn new(state: UserState) -> Self {
        Self {
            id: Uuid::new_v4(),
            state,
        }
    }

    /// Rebuilds a user from its stored parts. The id is taken as is.
    pub fn restore(id: Uuid, state: UserState) -> Self {
        Self { id, state }
    }

    pub fn rename(&mut self, name: String) {
        self.state.name = name;
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.state.birth_date = birth_date;
    }
}
