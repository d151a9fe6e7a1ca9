//! Corpus reader tests
//!
//! End-to-end checks of ordering, patient grouping, document identity
//! and the has_next/get_next protocol over real temporary trees.

#[cfg(unix)]
mod test_filesystem;
mod test_identity;
mod test_iteration;
mod test_ordering;
