pub mod auth;
pub mod health;
pub mod swagger;
pub mod tips;
pub mod users;
