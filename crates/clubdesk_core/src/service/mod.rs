//! Use-case services over the slot store.
//!
//! # Responsibility
//! - Orchestrate policy checks, defaulting and persistence into CRUD
//!   entry points, one generic controller for every entity kind.
//! - Keep presentation layers decoupled from storage details.

pub mod controller;
