pub mod chat_service;
pub mod encounter_service;
pub mod interest_service;
pub mod match_service;
