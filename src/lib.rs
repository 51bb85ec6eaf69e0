//! # actionsense-base
//!
//! Core library for GitHub Actions workflow parsing, `uses:` reference
//! resolution and `${{ … }}` expression completion.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Completion entry point, expression path resolution, uses links
//!   ↓
//! project   → ActionResolver: uses grammar, metadata fetch, TTL cache
//!   ↓
//! hir       → WorkflowIndex: jobs, steps, needs, inputs/outputs, env, secrets
//!   ↓
//! syntax    → YamlTree: ordered node tree with spans, tolerant decoding
//!   ↓
//! parser    → Logos lexer for bracket expressions
//!   ↓
//! base      → Primitives (TextRange, LineIndex, field name constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → parser → syntax → hir → project → ide)
// ============================================================================

/// Foundation types: TextRange, LineIndex, constants
pub mod base;

/// Text helpers shared by the parser and IDE layers
pub mod core;

/// Parser: Logos lexer and bracket expression extraction
pub mod parser;

/// Syntax: YamlTree, YamlNode, span location
pub mod syntax;

/// Workflow semantic index
pub mod hir;

/// Action resolution: uses grammar, fetch collaborators, metadata cache
pub mod project;

/// IDE features: completion, uses links
pub mod ide;

// Re-export foundation types
pub use base::{LineIndex, Position, TextRange, TextSize};
