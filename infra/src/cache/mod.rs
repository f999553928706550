//! Redis-backed cache

pub mod redis_cache;

pub use redis_cache::RedisCache;
