pub mod professor;
pub mod user;
