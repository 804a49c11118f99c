//! # Storage Module
//!
//! Handles guest profile persistence for the lodge backend.
//!
//! The domain layer only depends on the [`ProfileStorage`] trait. The shipped
//! implementation keeps profiles in process memory, so registered guests and
//! their booking histories are discarded whenever the service restarts.
//!
//! ## Key Responsibilities
//!
//! - **Storage Abstraction**: `get`, `put`, `remove` and `scan` over profiles
//!   keyed by lowercased email
//! - **In-Memory Backend**: a `BTreeMap` behind an async `RwLock`
//! - **Demo Data**: optional seed profiles for local runs

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::InMemoryProfileRepository;
pub use traits::{ProfilePredicate, ProfileStorage};
