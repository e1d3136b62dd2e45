use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use salvo::{http::StatusCode, writer::Json, Depot, FlowCtrl, Handler, Request, Response};
use uuid::Uuid;

use crate::app::{
    resource::user::{MessageResponse, UserInput, USER_CREATED, USER_DELETED},
    use_case,
};
use crate::domain::repository::UserStore;
use crate::error::app::ApplicationError;
use crate::error::http::BadRequest;
use crate::error::resource::NotFoundError;

macro_rules! map_res_err {
    ($result:ident, $response:ident) => {
        match $result {
            Err(err) => {
                $response.render(err);
                return;
            }
            Ok(ok) => ok,
        }
    };
}

pub struct CreateUserController<S> {
    store: Arc<RwLock<S>>,
}

impl<S> CreateUserController<S> {
    pub fn new(store: Arc<RwLock<S>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + Send + Sync + 'static> Handler for CreateUserController<S> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result: Result<UserInput, _> = req.parse_body().await.map_err(BadRequest::from);
        let input = map_res_err!(result, res);

        let result = use_case::user::create_user(self.store.as_ref(), input);
        map_res_err!(result, res);

        res.render(Json(MessageResponse {
            message: USER_CREATED.into(),
        }));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct ReadUserController<S> {
    store: Arc<RwLock<S>>,
}

impl<S> ReadUserController<S> {
    pub fn new(store: Arc<RwLock<S>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + Send + Sync + 'static> Handler for ReadUserController<S> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let id = extract_id(req);

        match use_case::user::read_user(self.store.as_ref(), id) {
            Some(user) => {
                res.render(Json(user));
                res.set_status_code(StatusCode::OK);
            }
            None => res.render(ApplicationError::<()>::from(NotFoundError::User(id))),
        }
    }
}

pub struct ReadAllUsersController<S> {
    store: Arc<RwLock<S>>,
}

impl<S> ReadAllUsersController<S> {
    pub fn new(store: Arc<RwLock<S>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + Send + Sync + 'static> Handler for ReadAllUsersController<S> {
    async fn handle(&self, _: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let users = use_case::user::read_all_users(self.store.as_ref());
        if users.is_empty() {
            res.render(ApplicationError::<()>::from(NotFoundError::NoUsers));
            return;
        }

        res.render(Json(users));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct UpdateUserController<S> {
    store: Arc<RwLock<S>>,
}

impl<S> UpdateUserController<S> {
    pub fn new(store: Arc<RwLock<S>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + Send + Sync + 'static> Handler for UpdateUserController<S> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let result: Result<UserInput, _> = req.parse_body().await.map_err(BadRequest::from);
        let input = map_res_err!(result, res);

        let result = use_case::user::update_user(self.store.as_ref(), input);
        let updated = map_res_err!(result, res);

        res.render(Json(updated));
        res.set_status_code(StatusCode::OK);
    }
}

pub struct RemoveUserController<S> {
    store: Arc<RwLock<S>>,
}

impl<S> RemoveUserController<S> {
    pub fn new(store: Arc<RwLock<S>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore + Send + Sync + 'static> Handler for RemoveUserController<S> {
    async fn handle(&self, req: &mut Request, _: &mut Depot, res: &mut Response, _: &mut FlowCtrl) {
        let id = extract_id(req);

        let result = use_case::user::remove_user(self.store.as_ref(), id);
        map_res_err!(result, res);

        res.render(Json(MessageResponse {
            message: USER_DELETED.into(),
        }));
        res.set_status_code(StatusCode::OK);
    }
}

/// Extract a uuid from a request id param
///
/// # Panic
///
/// Panics if a id param is not present or the content is not a valid uuid
fn extract_id(req: &Request) -> Uuid {
    req.params()
        .get("id")
        .expect("Expect to route only with valid uuid")
        .parse()
        .expect("Expect id param as a valid uuid")
}
