//! Record store implementations
//!
//! The Redis client provides connection management with retry logic; the
//! record store implementations on top of it satisfy the core
//! `RecordStoreTrait` contract (keyed, last-write-wins, total overwrite).

pub mod memory_store;
pub mod record_store;

mod redis_client;

pub use memory_store::InMemoryRecordStore;
pub use record_store::RedisRecordStore;
pub use redis_client::RedisClient;
