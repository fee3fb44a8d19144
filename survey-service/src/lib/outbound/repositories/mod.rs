pub mod professor;
pub mod user;

pub use professor::PostgresProfessorRepository;
pub use user::PostgresUserRepository;
