pub mod encounter_repo;
pub mod interest_repo;
pub mod position_repo;
pub mod profile_repo;
pub mod schema;
pub mod tag_repo;
