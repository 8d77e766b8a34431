#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

//! Ordered maps backed by binary search trees: a plain [`BinarySearchTree`]
//! and its self-balancing [`RedBlackTree`] variant.

pub mod binary_search_tree;
pub mod red_black_tree;

pub use binary_search_tree::BinarySearchTree;
pub use red_black_tree::RedBlackTree;
