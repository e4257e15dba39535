pub mod model;
pub mod repository;
pub mod window;

pub use model::{BookingStatus, NewReservation, Reservation};
pub use repository::ReservationRepository;
pub use window::TimeWindow;
