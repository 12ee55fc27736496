pub mod member_cache_entry;
