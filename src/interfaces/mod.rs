//! Driving-side interfaces that feed orders into the application.

pub mod csv;
