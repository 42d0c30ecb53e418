//! In-memory account storage.

mod repository;

pub use repository::InMemoryAccountRepository;
