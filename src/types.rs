use crate::node::Node;

/// An owning link to the next node down the chain, or the end of it.
pub(crate) type Link<A> = Option<Box<Node<A>>>;
