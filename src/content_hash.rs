//! Content hashing for trees. Unlike the structural hash, the digest depends
//! on field order and sequence order, so it can key caches where XOR
//! collisions between mirrored trees are unacceptable.

use sha2::{Digest, Sha256};

use crate::ast::Node;
use crate::pretty::{DumpOptions, dump};

/// A SHA-256 content hash.
pub type ContentHash = [u8; 32];

/// SHA-256 of the canonical dump (default options, provenance excluded).
pub fn hash_node(node: &Node) -> ContentHash {
    hash_str(&dump(node, &DumpOptions::default()))
}

fn hash_str(s: &str) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hasher.finalize().into()
}

/// Lowercase hex rendering of a hash.
pub fn to_hex(hash: &ContentHash) -> String {
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
