pub mod choice_service;
pub mod traits;
pub mod types;
