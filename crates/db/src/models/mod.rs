//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - Query-string filters for list endpoints, where the resource has any

pub mod alinhamento;
pub mod artista;
pub mod bilhete;
pub mod concerto;
pub mod palco;
