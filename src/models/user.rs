use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";

/// One row of the `users` table. `id` stays 0 until the row is saved.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub status: String,
    /// Argon2 PHC string. Read queries leave it empty.
    #[serde(skip_serializing, default)]
    #[sqlx(default)]
    pub password: String,
}

/// Fields safe to show to any caller.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub date_created: String,
    pub status: String,
}

/// Fields shown to internal callers.
#[derive(Debug, Clone, Serialize)]
pub struct PrivateUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_created: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UserView {
    Public(PublicUser),
    Private(PrivateUser),
}

impl User {
    pub fn marshall(&self, public: bool) -> UserView {
        if public {
            UserView::Public(PublicUser {
                id: self.id,
                date_created: self.date_created.clone(),
                status: self.status.clone(),
            })
        } else {
            UserView::Private(PrivateUser {
                id: self.id,
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                email: self.email.clone(),
                date_created: self.date_created.clone(),
                status: self.status.clone(),
            })
        }
    }

    pub fn marshall_all(users: &[User], public: bool) -> Vec<UserView> {
        users.iter().map(|u| u.marshall(public)).collect()
    }
}
