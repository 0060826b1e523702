// src/middleware.rs

pub mod write_gate;
