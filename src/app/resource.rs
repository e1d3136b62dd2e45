pub mod user {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use crate::base::resource_id;

    pub const USER_CREATED: &str = "User created successfully";
    pub const USER_UPDATED: &str = "User updated successfully";
    pub const USER_DELETED: &str = "User deleted successfully";
    pub const NOTHING_TO_UPDATE: &str = "Nothing to update";

    /// Create and update payload. Every field is optional on the wire: create
    /// requires name and birth date to validate, update applies the fields
    /// present.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserInput {
        pub id: Option<Uuid>,
        pub name: Option<String>,
        pub birth_date: Option<NaiveDate>,
    }

    resource_id!(UserInput, "user::UserInput");

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserResponse {
        pub id: Uuid,
        pub name: String,
        pub birth_date: NaiveDate,
    }

    resource_id!(UserResponse, "user::User");

    #[derive(Debug, Clone, Serialize)]
    pub struct MessageResponse {
        pub message: String,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct UpdateUserResponse {
        pub message: String,
        pub user: UserResponse,
    }
}
