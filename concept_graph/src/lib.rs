//! # Concept Graph
//!
//! Turns a grade's curriculum records into a browsable knowledge graph and
//! maps clicks on that graph back to concept records. Layout and drawing are
//! left to whatever rendering surface consumes the nodes and edges.
//!
//! ## Core Components
//!
//! - **graph**: Node identifiers, node/edge types, and the deterministic graph builder
//! - **lookup**: Click resolution and related-activity queries
//! - **events**: Click payloads sent back by the rendering surface
//! - **session**: Grade and selection state transitions for one viewer
//! - **details**: View model for the concept details panel
//!
//! ## Design Philosophy
//!
//! - **Pure**: Building and resolving are functions of the dataset; nothing is cached between rebuilds
//! - **Forgiving**: Dangling references and missing optional fields are dropped, never reported
//! - **Sticky**: Only a successful concept click changes the selection

pub mod details;
pub mod events;
pub mod graph;
pub mod lookup;
pub mod session;

pub use details::*;
pub use events::*;
pub use graph::*;
pub use lookup::*;
pub use session::*;
