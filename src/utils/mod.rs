//! # Utility Modules
//!
//! Supporting utilities around the framing core.
//!
//! ## Components
//! - **Logging**: structured logging configuration via `tracing`

pub mod logging;
