pub mod resource;
pub mod use_case;

pub mod transform {
    pub mod user {
        use crate::{
            app::resource::user::UserResponse,
            domain::entity::{user::User, Entity},
        };

        impl From<User> for UserResponse {
            fn from(user: User) -> Self {
                Self {
                    id: user.ident(),
                    name: user.name().clone(),
                    birth_date: *user.birth_date(),
                }
            }
        }
    }
}
