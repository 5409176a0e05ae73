pub mod errors;
pub mod memory;
pub mod org;

pub use memory::InMemoryRepository;
pub use org::{MongoDbRepository, Repository};
