use crate::Key;
use crate::utils::{bit_at, fits_in_depth};
use std::error::Error;
use std::fmt;

pub const DEFAULT_DEPTH: u8 = 16;

/// Fixed-depth binary trie over the bit representation of keys, traversed
/// most-significant-bit first. Nodes carry no payload; a key is a member iff
/// its full-depth path exists.
#[derive(Debug)]
pub struct BitTrie {
    root: TrieNode,
    // no. of trie levels = no. of bits in the keys
    depth: u8,
}

#[derive(Debug, Default)]
struct TrieNode {
    // children indexed by bit value
    children: [Option<Box<TrieNode>>; 2],
}

/// Rejected bit depth at construction: zero, or wider than `Key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDepth(pub u8);

impl fmt::Display for InvalidDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bit depth must be in 1..={}, got {}",
            Key::BITS,
            self.0
        )
    }
}

impl Error for InvalidDepth {}

impl BitTrie {
    pub fn new(depth: u8) -> Result<Self, InvalidDepth> {
        if depth == 0 || u32::from(depth) > Key::BITS {
            return Err(InvalidDepth(depth));
        }
        Ok(Self {
            root: TrieNode::default(),
            depth,
        })
    }

    pub fn with_default_depth() -> Self {
        Self {
            root: TrieNode::default(),
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.iter().all(|c| c.is_none())
    }

    /// Inserts `key`, creating any missing nodes along its bit path.
    /// Idempotent. Keys wider than the configured depth are a caller error.
    pub fn insert(&mut self, key: Key) {
        debug_assert!(
            fits_in_depth(key, self.depth),
            "key {key} exceeds the configured bit depth {}",
            self.depth
        );

        let mut node = &mut self.root;
        for position in (1..=self.depth).rev() {
            let bit = bit_at(key, position) as usize;
            node = node.children[bit].get_or_insert_with(Default::default);
        }
    }

    pub fn contains(&self, key: Key) -> bool {
        let mut node = &self.root;
        for position in (1..=self.depth).rev() {
            let bit = bit_at(key, position) as usize;
            match &node.children[bit] {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Maximum of `query ^ v` over all inserted keys `v`, found by preferring
    /// the child with the opposite bit at each level. `None` if nothing has
    /// been inserted yet.
    pub fn max_xor(&self, query: Key) -> Option<Key> {
        if self.is_empty() {
            return None;
        }

        let mut node = &self.root;
        let mut result: Key = 0;
        for position in (1..=self.depth).rev() {
            let bit = bit_at(query, position) as usize;
            match (&node.children[bit ^ 1], &node.children[bit]) {
                (Some(opposite), _) => {
                    result |= 1 << (position - 1);
                    node = opposite;
                }
                (None, Some(same)) => node = same,
                // insert always builds full-depth paths, so a non-empty trie
                // has a child at every level
                (None, None) => break,
            }
        }
        Some(result)
    }

    pub fn pretty_print(&self) {
        println!("\n=== Bit Trie (depth {}) ===", self.depth);
        if self.is_empty() {
            println!("  (empty trie)");
        } else {
            Self::print_node(&self.root, 0, String::new());
        }
        println!("===========================\n");
    }

    fn print_node(node: &TrieNode, level: u8, prefix: String) {
        if level > 0 {
            println!("  level {:2}: {}", level, prefix);
        }
        for bit in 0..2u8 {
            if let Some(child) = &node.children[bit as usize] {
                Self::print_node(child, level + 1, format!("{prefix}{bit}"));
            }
        }
    }
}
