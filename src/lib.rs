//! Construction and validation of the sentence/fragment/template tree used
//! by randomized-text renderers. Pure data: nodes are immutable once built,
//! and every structural rule is enforced before a node exists.

mod ast;
mod builder;
mod error;
mod types;

pub use ast::{Child, Node, NodeKind};
pub use builder::{construct, construct_named, make_fragment, make_sentence, make_template};
pub use error::BuildError;
pub use types::{Attributes, DictionaryItem, RandomItemGetter};
