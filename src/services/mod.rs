pub mod users;

pub use users::{CreateUser, LoginRequest, UpdateUser, UserService};
