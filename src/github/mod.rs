//! GitHub CLI integration module
//!
//! Repository operations performed through the `gh` command:
//! - Existence lookup
//! - Creation with visibility, source directory and push

pub mod repo;
