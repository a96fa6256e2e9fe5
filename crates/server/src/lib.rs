//! HTTP surface and lookup orchestration.
//!
//! Receives slash commands over a signature-checked axum route, acks them
//! immediately, and runs the query-and-format pipeline on a spawned task
//! that replies through the platform's Web API.

pub mod app;
pub mod config;
pub mod handler;
pub mod middleware;
pub mod observability;
