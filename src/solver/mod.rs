pub mod assignment;
pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod stats;
pub mod work_list;

pub use assignment::Assignment;
pub use domains::DomainStore;
pub use engine::SolverEngine;
pub use stats::SearchStats;
