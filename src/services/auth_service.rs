use crate::database::MongoDB;
use crate::models::{User, UserInfo};
use crate::utils::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};
use mongodb::bson::{doc, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserInfo,
}

fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref write_error))
            if write_error.code == 11000
    )
}

// User registration
pub async fn register(
    db: &MongoDB,
    request: &RegisterRequest,
) -> Result<RegisterResponse, AppError> {
    let collection = db.collection::<User>("users");

    // Check if email already exists
    let existing = collection
        .find_one(doc! { "email": &request.email })
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "User already exists with this email".to_string(),
        ));
    }

    // Hash the password before storing
    let hashed_password = hash(&request.password, DEFAULT_COST)
        .map_err(|e| AppError::DatabaseError(format!("Failed to hash password: {}", e)))?;

    let new_user = User {
        _id: None,
        legacy_id: None,
        email: request.email.clone(),
        password: Some(hashed_password),
        name: request.name.clone(),
        created_at: Some(BsonDateTime::now()),
    };

    // The unique email index turns a lost race between two concurrent
    // registrations into a duplicate-key error; report it as the same
    // conflict the pre-insert check produces.
    let result = collection.insert_one(&new_user).await.map_err(|e| {
        if is_duplicate_key_error(&e) {
            AppError::Conflict("User already exists with this email".to_string())
        } else {
            AppError::from(e)
        }
    })?;

    let user_id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_default();

    Ok(RegisterResponse {
        success: true,
        message: "User registered successfully".to_string(),
        user_id,
    })
}

// User login
pub async fn login(db: &MongoDB, request: &LoginRequest) -> Result<LoginResponse, AppError> {
    let collection = db.collection::<User>("users");

    let user = collection
        .find_one(doc! { "email": &request.email })
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    // Same generic failure for unknown email, missing password, and
    // mismatch, so the response never reveals which one it was. A stored
    // value that isn't a bcrypt hash (legacy seed rows) fails closed too.
    let valid = user
        .password
        .as_deref()
        .map(|stored| verify(&request.password, stored).unwrap_or(false))
        .unwrap_or(false);

    if !valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    Ok(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: UserInfo {
            id: user._id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
        },
    })
}
