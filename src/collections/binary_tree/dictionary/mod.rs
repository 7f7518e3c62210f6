mod comparator;
mod iter;
mod node;
mod tree_dictionary;

pub use comparator::*;
pub use iter::*;
pub(crate) use node::*;
pub use tree_dictionary::*;
