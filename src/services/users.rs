use std::sync::Arc;

use serde::Deserialize;

use crate::auth::password;
use crate::dao::UserDao;
use crate::date;
use crate::error::AppError;
use crate::models::{User, STATUS_ACTIVE};

#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone)]
pub struct UserService {
    dao: Arc<dyn UserDao>,
}

impl UserService {
    pub fn new(dao: Arc<dyn UserDao>) -> Self {
        Self { dao }
    }

    pub async fn create(&self, req: CreateUser) -> Result<User, AppError> {
        let email = normalize_email(&req.email);
        if email.is_empty() {
            return Err(AppError::BadRequest("invalid email address".to_string()));
        }
        if req.password.is_empty() {
            return Err(AppError::BadRequest("invalid password".to_string()));
        }

        let hash = password::hash_password(&req.password).map_err(|e| {
            tracing::error!("Password hashing failed: {e}");
            AppError::Internal("error when trying to hash password".to_string())
        })?;

        let mut user = User {
            id: 0,
            first_name: req.first_name.trim().to_string(),
            last_name: req.last_name.trim().to_string(),
            email,
            date_created: date::now_db_format(),
            status: STATUS_ACTIVE.to_string(),
            password: hash,
        };
        self.dao.save(&mut user).await?;

        // Callers never see the stored hash.
        user.password.clear();
        Ok(user)
    }

    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.dao.get(id).await
    }

    /// `partial` keeps current values for fields left empty in the request.
    pub async fn update(&self, id: i64, req: UpdateUser, partial: bool) -> Result<User, AppError> {
        let mut current = self.dao.get(id).await?;

        let first_name = req.first_name.trim();
        let last_name = req.last_name.trim();
        let email = normalize_email(&req.email);

        if partial {
            if !first_name.is_empty() {
                current.first_name = first_name.to_string();
            }
            if !last_name.is_empty() {
                current.last_name = last_name.to_string();
            }
            if !email.is_empty() {
                current.email = email;
            }
        } else {
            if email.is_empty() {
                return Err(AppError::BadRequest("invalid email address".to_string()));
            }
            current.first_name = first_name.to_string();
            current.last_name = last_name.to_string();
            current.email = email;
        }

        self.dao.update(&current).await?;
        Ok(current)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.dao.delete(id).await
    }

    pub async fn search(&self, status: &str) -> Result<Vec<User>, AppError> {
        self.dao.find_by_status(status.trim()).await
    }

    pub async fn login(&self, req: LoginRequest) -> Result<User, AppError> {
        let invalid = || AppError::NotFound("invalid user credentials".to_string());

        let email = normalize_email(&req.email);
        if email.is_empty() || req.password.is_empty() {
            return Err(invalid());
        }

        let mut user = match self.dao.find_by_email(&email).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => return Err(invalid()),
            Err(e) => return Err(e),
        };

        let valid = password::verify_password(&req.password, &user.password).map_err(|e| {
            tracing::error!(user_id = user.id, "Stored password hash unreadable: {e}");
            AppError::database()
        })?;
        if !valid || user.status != STATUS_ACTIVE {
            return Err(invalid());
        }

        user.password.clear();
        Ok(user)
    }
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
