pub mod model;
pub mod repository;

pub use model::Coach;
pub use repository::CoachRepository;
