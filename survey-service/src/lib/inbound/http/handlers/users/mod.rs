pub mod list_users;
pub mod login;
pub mod signup;

pub use list_users::list_users;
pub use login::login;
pub use signup::signup;
