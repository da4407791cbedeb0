pub mod avl_tree;
pub mod bit_trie;
pub mod data_gen;
pub mod utils;

pub use avl_tree::AvlTree;
pub use bit_trie::{BitTrie, InvalidDepth};

pub type Key = u64;

#[cfg(test)]
mod proptests;
