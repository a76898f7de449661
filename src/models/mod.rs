pub mod dashboard;
pub mod issue;
pub mod profile;
pub mod repository;
