//! # Court Booking Engine
//!
//! Booking-conflict and dynamic-pricing engine for time-boxed court
//! reservations. Given a proposed reservation (court, window, optional
//! coach and equipment), it decides atomically whether the slot is free
//! and computes the total price from an ordered set of pricing rules.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository traits and the
//!   pricing/overlap logic
//! - **application**: Booking use cases (availability, price preview,
//!   atomic confirm, day listings)
//! - **infrastructure**: In-memory reference store; a SQL store plugs
//!   in behind the same repository traits
//! - **config**: Business timezone and currency, plus the boundary
//!   helpers that anchor incoming local-time strings
//! - **shared**: Error taxonomy and the transient-failure retry helper
//!
//! HTTP routing, authentication and catalog administration are external
//! collaborators; this crate only defines the interfaces it needs from
//! them.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use court_booking::domain::Court;
//! use court_booking::{BookingRequest, BookingService, Config, InMemoryStore};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), court_booking::domain::DomainError> {
//! let store = Arc::new(InMemoryStore::new());
//! store.insert_court(Court::new(1, "Court 1 (Indoor)", Decimal::from(200)));
//!
//! let service = BookingService::new(store, Config::default());
//! let reservation = service
//!     .confirm_booking(BookingRequest {
//!         user_id: 7,
//!         court_id: 1,
//!         start_time: "2025-06-02T10:00:00".into(),
//!         end_time: "2025-06-02T11:00:00".into(),
//!         coach_id: None,
//!         equipment: vec![],
//!     })
//!     .await?;
//! assert_eq!(reservation.total_price, Decimal::from(200));
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::booking::{
    AvailabilityChecker, BookingRequest, BookingService, EquipmentLine, PriceCalculator,
};
pub use config::Config;
pub use domain::{
    BookingStatus, DomainError, DomainResult, PriceBreakdown, Reservation, TimeWindow,
};
pub use infrastructure::storage::InMemoryStore;
pub use shared::retry::{retry_transient, RetryPolicy};
