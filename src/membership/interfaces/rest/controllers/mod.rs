pub mod member_rest_controller;
