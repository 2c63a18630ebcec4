//! Systems - simulation and interaction behaviours for the footer

pub mod ambient;
pub mod pointer;
pub mod rigid_body;
pub mod rigid_body_system;
