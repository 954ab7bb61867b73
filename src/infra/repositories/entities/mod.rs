//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod city;
pub mod company;
pub mod lead;
pub mod lead_assignment;
pub mod service;
pub mod user;
