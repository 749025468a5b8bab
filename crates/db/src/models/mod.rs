//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (where the API can write)

pub mod course;
pub mod plan;
pub mod program;
pub mod user;
