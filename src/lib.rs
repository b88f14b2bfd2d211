//! `sensorflow-api`: HTTP scaffold for the sensor data API.
//!
//! The only route today is `GET /health`. Modules follow the Explicit Module
//! Boundary Pattern (EMBP): `config` owns environment access, `routes` is the
//! gateway for every endpoint, and `server` owns the listener.

pub mod config;
mod error;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use config::Config;
pub use error::ServeError;
