pub mod dashboard;
pub mod github;
pub mod languages;
pub mod renderer;
pub mod repositories;
pub mod resolver;
pub mod search;
pub mod storage;
