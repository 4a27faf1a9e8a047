//! Flat-file adapters, currently CSV menu seeding.

pub mod csv;
