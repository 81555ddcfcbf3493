//! User command and query handlers.

mod delete_user;
mod get_user;
mod register_user;
mod update_profile;

pub use delete_user::{DeleteUserCommand, DeleteUserHandler};
pub use get_user::{GetUserByEmailHandler, GetUserHandler, GetUserQuery, ListUsersHandler};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
