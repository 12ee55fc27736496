pub mod member_query_service_impl;
