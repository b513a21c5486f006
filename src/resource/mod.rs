//! Reactive list resources
//!
//! A [`ListResource`] is a client-side observable cache of one remote
//! collection. The consistency model is deliberately simple: every
//! successful mutation triggers a full re-read, so the local sequence is
//! always a mirror of the last successful read and never a speculative
//! merge.

pub mod list;

pub use list::{ListResource, ListenerId, ResourceState};
