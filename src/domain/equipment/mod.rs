pub mod model;
pub mod repository;

pub use model::Equipment;
pub use repository::EquipmentRepository;
