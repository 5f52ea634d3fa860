//! Graph module - the node/edge view of a grade's knowledge base.
//!
//! The graph consists of:
//! - **Domain nodes**: One box per distinct domain
//! - **Strand nodes**: One ellipse per distinct strand
//! - **Concept nodes**: One dot per distinct concept name
//! - **Edges**: Domain-strand and strand-concept hierarchy links, plus concept interconnections

mod builder;
mod elements;
mod node_id;

pub use builder::*;
pub use elements::*;
pub use node_id::*;
