pub mod app {
    use salvo::{prelude::StatusError, writer::Json, Piece};
    use serde::Serialize;

    use super::{
        http::ErrorResponse,
        resource::{ConflictError, NotFoundError, ValidationError},
    };

    #[derive(Debug, Serialize)]
    pub enum ApplicationError<R> {
        Validation(ValidationError<R>),
        Conflict(ConflictError),
        NotFound(NotFoundError),
    }

    impl<R> std::fmt::Display for ApplicationError<R> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Validation(err) => std::fmt::Display::fmt(err, f),
                Self::Conflict(err) => std::fmt::Display::fmt(err, f),
                Self::NotFound(err) => std::fmt::Display::fmt(err, f),
            }
        }
    }

    impl<R: std::fmt::Debug> std::error::Error for ApplicationError<R> {}

    impl<R> From<ValidationError<R>> for ApplicationError<R> {
        fn from(err: ValidationError<R>) -> Self {
            Self::Validation(err)
        }
    }

    impl<R> From<ConflictError> for ApplicationError<R> {
        fn from(err: ConflictError) -> Self {
            Self::Conflict(err)
        }
    }

    impl<R> From<NotFoundError> for ApplicationError<R> {
        fn from(err: NotFoundError) -> Self {
            Self::NotFound(err)
        }
    }

    impl<R: Serialize + Send> Piece for ApplicationError<R> {
        fn render(self, res: &mut salvo::Response) {
            let status = match &self {
                ApplicationError::Validation(_) => StatusError::bad_request(),
                ApplicationError::Conflict(_) => StatusError::conflict(),
                ApplicationError::NotFound(_) => StatusError::not_found(),
            };
            let message = self.to_string();
            res.render(Json(ErrorResponse::from_status_error(&status, message, self)));
            res.set_status_error(status);
        }
    }
}

pub mod resource {
    use derive_more::Display;
    use serde::Serialize;
    use uuid::Uuid;

    use crate::base::ResourceID;
    use crate::domain::entity::user::User;
    use crate::domain::repository::AlreadyExists;

    /// Kinds of user input validation failure.
    ///
    /// The `Display` output is the client facing message.
    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
    pub enum ValidationFault {
        /// Required name is absent or empty.
        #[display(fmt = "Name is required")]
        NameRequired,
        /// Birth date is absent or not strictly before the current date.
        #[display(fmt = "Birthdate must be in the past")]
        BirthDateNotInPast,
    }

    impl std::error::Error for ValidationFault {}

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct ValidationError<R> {
        /// Resource value
        pub resource: R,
        /// Name of the resource
        pub resource_type: &'static str,
        /// Rejected policy
        pub fault: ValidationFault,
    }

    impl<R> ValidationError<R> {
        pub fn from_resource(resource: R, fault: ValidationFault) -> Self
        where
            R: ResourceID,
        {
            Self {
                resource,
                resource_type: R::resource_id(),
                fault,
            }
        }
    }

    impl<R> std::fmt::Display for ValidationError<R> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            std::fmt::Display::fmt(&self.fault, f)
        }
    }

    impl<R: std::fmt::Debug> std::error::Error for ValidationError<R> {}

    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
    #[display(fmt = "User with the same Id already exists")]
    pub struct ConflictError {
        /// Resource id
        pub resource_id: Uuid,
        /// Name of the resource
        pub resource_type: &'static str,
    }

    impl std::error::Error for ConflictError {}

    impl From<AlreadyExists> for ConflictError {
        fn from(err: AlreadyExists) -> Self {
            Self {
                resource_id: err.0,
                resource_type: <User as ResourceID>::resource_id(),
            }
        }
    }

    #[derive(Debug, Display, Clone, PartialEq, Eq, Serialize)]
    pub enum NotFoundError {
        /// No user stored under the requested id.
        #[display(fmt = "User not found with Id {_0}")]
        User(Uuid),
        /// The store holds no users at all.
        #[display(fmt = "No users found")]
        NoUsers,
    }

    impl std::error::Error for NotFoundError {}
}

pub mod http {
    use derive_more::Display;
    use salvo::{http::ParseError, prelude::StatusError, writer::Json, Piece, Response};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Display, Clone, Serialize)]
    pub enum BadRequest {
        #[display(fmt = "Invalid request content")]
        InvalidContent,
    }

    impl std::error::Error for BadRequest {}

    #[derive(Debug, Display, Clone, Serialize, Deserialize)]
    #[display(fmt = "Response error: {title}, {message}")]
    pub struct ErrorResponse<T> {
        pub title: String,
        pub message: String,
        pub error: T,
    }

    impl<T> ErrorResponse<T> {
        pub fn from_status_error(status: &StatusError, message: String, err: T) -> Self {
            Self {
                title: status.name.clone(),
                message,
                error: err,
            }
        }
    }

    impl From<ParseError> for BadRequest {
        fn from(_: ParseError) -> Self {
            BadRequest::InvalidContent
        }
    }

    impl Piece for BadRequest {
        fn render(self, res: &mut Response) {
            let status = StatusError::bad_request();
            let message = self.to_string();
            res.render(Json(ErrorResponse::from_status_error(&status, message, self)));
            res.set_status_error(status);
        }
    }
}
