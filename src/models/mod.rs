//! Models loaded from outside the domain.

pub mod config;
