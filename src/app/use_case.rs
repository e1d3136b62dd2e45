pub mod user {
    use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

    use uuid::Uuid;

    use crate::{
        app::resource::user::{
            UpdateUserResponse, UserInput, UserResponse, NOTHING_TO_UPDATE, USER_UPDATED,
        },
        domain::{entity::user::User, repository::UserStore},
        error::{
            app::ApplicationError,
            resource::{ConflictError, NotFoundError, ValidationError},
        },
    };

    pub mod validation {
        use chrono::{Local, NaiveDate};

        use crate::app::resource::user::UserInput;
        use crate::domain::entity::user::UserState;
        use crate::error::resource::ValidationFault;

        /// Checks a payload against the create policy: name present and non
        /// empty, birth date present and strictly before today.
        ///
        /// The name is checked first, so a payload failing both reports the
        /// name fault.
        pub fn validate(input: &UserInput) -> Result<UserState, ValidationFault> {
            let name = match input.name.as_deref() {
                Some(name) if !name.is_empty() => name,
                _ => return Err(ValidationFault::NameRequired),
            };

            match input.birth_date {
                Some(date) if birth_date_in_past(date) => Ok(UserState::new(name.into(), date)),
                _ => Err(ValidationFault::BirthDateNotInPast),
            }
        }

        /// Whether `birth_date` is strictly before the current calendar date.
        /// Time of day plays no part in the comparison.
        pub fn birth_date_in_past(birth_date: NaiveDate) -> bool {
            birth_date < today()
        }

        fn today() -> NaiveDate {
            Local::now().date_naive()
        }
    }

    fn read_store<S>(store: &RwLock<S>) -> RwLockReadGuard<'_, S> {
        store
            .read()
            .expect("Expect user store lock to not be poisoned")
    }

    fn write_store<S>(store: &RwLock<S>) -> RwLockWriteGuard<'_, S> {
        store
            .write()
            .expect("Expect user store lock to not be poisoned")
    }

    pub fn create_user<S: UserStore>(
        store: &RwLock<S>,
        input: UserInput,
    ) -> Result<UserResponse, ApplicationError<UserInput>> {
        let state = validation::validate(&input)
            .map_err(|fault| ValidationError::from_resource(input.clone(), fault))?;
        let user = User::new(state);

        write_store(store)
            .put(user.clone())
            .map_err(ConflictError::from)?;

        Ok(user.into())
    }

    pub fn read_user<S: UserStore>(store: &RwLock<S>, id: Uuid) -> Option<UserResponse> {
        read_store(store).get(id).cloned().map(Into::into)
    }

    pub fn read_all_users<S: UserStore>(store: &RwLock<S>) -> Vec<UserResponse> {
        read_store(store)
            .get_all()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Applies every supplied field that passes its own check to the stored
    /// user. A name must be non empty and differ from the current one, a
    /// birth date must be strictly in the past. Fields failing their check
    /// are left untouched rather than failing the operation.
    pub fn update_user<S: UserStore>(
        store: &RwLock<S>,
        input: UserInput,
    ) -> Result<UpdateUserResponse, ApplicationError<UserInput>> {
        let id = input.id.unwrap_or_else(Uuid::nil);

        let mut guard = write_store(store);
        let mut user = guard.get(id).cloned().ok_or(NotFoundError::User(id))?;

        let mut changed = false;

        if let Some(name) = &input.name {
            if !name.is_empty() && name != user.name() {
                user.rename(name.clone());
                changed = true;
            }
        }

        if let Some(birth_date) = input.birth_date {
            if validation::birth_date_in_past(birth_date) {
                user.set_birth_date(birth_date);
                changed = true;
            }
        }

        let message = if changed {
            guard.set(user.clone());
            USER_UPDATED
        } else {
            NOTHING_TO_UPDATE
        };

        Ok(UpdateUserResponse {
            message: message.into(),
            user: user.into(),
        })
    }

    pub fn remove_user<S: UserStore>(
        store: &RwLock<S>,
        id: Uuid,
    ) -> Result<(), ApplicationError<()>> {
        if !write_store(store).delete(id) {
            return Err(NotFoundError::User(id).into());
        }

        Ok(())
    }
}
