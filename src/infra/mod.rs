pub mod controller;
pub mod store;

pub mod router {
    use std::sync::{Arc, RwLock};

    use salvo::{logging::Logger, routing::PathFilter, Router};

    use crate::domain::repository::UserStore;

    use super::controller::*;

    pub fn app<S: UserStore + Send + Sync + 'static>(store: Arc<RwLock<S>>) -> Router {
        PathFilter::register_wisp_regex(
            "uuid",
            regex::Regex::new(
                "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
            )
            .expect("Expect a valid uuid regex"),
        );

        Router::new()
            .push(
                Router::with_path("users")
                    .get(ReadAllUsersController::new(store.clone()))
                    .post(CreateUserController::new(store.clone()))
                    .put(UpdateUserController::new(store.clone()))
                    .push(
                        Router::with_path("<id:uuid>")
                            .get(ReadUserController::new(store.clone()))
                            .delete(RemoveUserController::new(store)),
                    ),
            )
            .hoop(Logger)
    }
}
