//! IDE features: completion and links over workflow documents.
//!
//! This module is the interface between the workflow index and an editor
//! integration. Each function corresponds to one editor request.
//!
//! ## Design Principles
//!
//! 1. **Per-request state**: an [`Analysis`] is built for one text and caret
//!    and dropped afterwards; only the action cache outlives it
//! 2. **No editor types**: plain offsets and our own item types
//! 3. **Never fails**: bad input yields empty results
//!
//! ## Usage
//!
//! ```ignore
//! use actionsense::ide::AnalysisHost;
//!
//! let host = AnalysisHost::offline();
//! let analysis = host.analysis(text, Some(Path::new(".github/workflows/ci.yml")), caret);
//! for item in analysis.completions() {
//!     println!("{} {:?}", item.label, item.detail);
//! }
//! ```

mod analysis;
mod completion;
mod defaults;
mod document_links;
mod expression;


pub use analysis::{Analysis, AnalysisHost};
pub use completion::{CompletionItem, CompletionKind, completions};
pub use document_links::{DocumentLink, document_links, uses_link};
pub use expression::{PathCompletion, ResolutionState, Root, resolve_at_caret, resolve_path};
