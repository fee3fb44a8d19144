pub mod add_rating;
pub mod create_professor;
pub mod delete_professor;
pub mod delete_rating;
pub mod get_professor;
pub mod list_professors;
pub mod update_professor;

pub use add_rating::add_rating;
pub use create_professor::create_professor;
pub use delete_professor::delete_professor;
pub use delete_rating::delete_rating;
pub use get_professor::get_professor;
pub use list_professors::list_professors;
pub use update_professor::update_professor;
