use std::sync::Arc;

use crate::services::UserService;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub users: UserService,
}
