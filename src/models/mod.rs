pub mod user;

pub use user::{PrivateUser, PublicUser, User, UserView, STATUS_ACTIVE};
