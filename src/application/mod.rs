//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `CartEngine` (the per-session ordering state
//! machine), the `ReservationDesk` for table bookings, and the `Dashboard`
//! exposing admin operations behind an explicit session context.

pub mod dashboard;
pub mod engine;
pub mod reservations;
