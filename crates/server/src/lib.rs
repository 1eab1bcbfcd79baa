//! Thing Server library.
//!
//! This crate provides the server functionality as a library, allowing
//! it to be tested and reused. The binary in `main.rs` wires it to a
//! TCP listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
