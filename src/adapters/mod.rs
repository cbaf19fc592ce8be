pub mod api_handler;
pub mod health_handler;
pub mod random_generator;
pub mod user_generator;
