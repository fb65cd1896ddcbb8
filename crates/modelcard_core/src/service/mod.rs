//! Submission use-case services.
//!
//! # Responsibility
//! - Run one aggregation-and-export cycle per submission.
//! - Keep UI/FFI layers decoupled from backend selection and rendering.

pub mod card_service;
