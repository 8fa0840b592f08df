//! BFHL API - numeric utilities and a one-word AI answer over HTTP.
//!
//! A request body names exactly one operation (fibonacci, prime, lcm, hcf,
//! AI); the service evaluates it and answers with a uniform JSON envelope.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
