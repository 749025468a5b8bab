//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod course_repo;
pub mod plan_repo;
pub mod program_repo;
pub mod user_repo;

pub use course_repo::CourseRepo;
pub use plan_repo::PlanRepo;
pub use program_repo::ProgramRepo;
pub use user_repo::UserRepo;
