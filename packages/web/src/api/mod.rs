//! REST client for the booking API server

mod client;

pub use client::*;
