//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads and updates take `&PgPool` and check out a connection for the
//! duration of one statement. `create` methods accept any Postgres executor
//! so the seeder can run them inside its transaction.

pub mod alinhamento_repo;
pub mod artista_repo;
pub mod bilhete_repo;
pub mod concerto_repo;
pub mod palco_repo;

pub use alinhamento_repo::AlinhamentoRepo;
pub use artista_repo::ArtistaRepo;
pub use bilhete_repo::BilheteRepo;
pub use concerto_repo::ConcertoRepo;
pub use palco_repo::PalcoRepo;
