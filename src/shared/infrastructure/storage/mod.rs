pub mod in_memory_key_value_store;
pub mod key_value_store;
pub mod storage_error;
pub mod ttl_cache;
