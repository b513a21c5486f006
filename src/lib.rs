//! OpenTrainer - terminal client library for the OpenTrainer fitness API
//!
//! This library provides the reactive list resources, the REST client, and
//! the form gates used by the `opentrainer` binary.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `resource`: reactive `ListResource<T>` caches mirroring remote collections
//! - `api`: typed REST client and the `CollectionApi` seam
//! - `models`: trainer, client, and session records plus drafts
//! - `forms`: pre-submission validation gates
//! - `config`: configuration loading and validation
//! - `error`: error types and result aliases
//! - `cli` / `commands`: command-line interface and handlers
//!
//! # Example
//!
//! ```no_run
//! use opentrainer::config::Config;
//! use opentrainer::context::AppContext;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let ctx = AppContext::from_config(&config)?;
//!     ctx.trainers.refresh().await?;
//!     println!("{} trainers loaded", ctx.trainers.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod forms;
pub mod models;
pub mod resource;

// Re-export commonly used types
pub use config::Config;
pub use context::AppContext;
pub use error::{OpenTrainerError, Result};
pub use models::{Client, Routine, Session, Trainer};
pub use resource::{ListResource, ResourceState};

#[cfg(test)]
pub mod test_utils;
