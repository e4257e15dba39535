pub mod model;
pub mod repository;

pub use model::Court;
pub use repository::CourtRepository;
