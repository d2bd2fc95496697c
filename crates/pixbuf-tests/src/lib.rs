//! Integration tests for pixbuf crates.
//!
//! End-to-end checks that go through more than one crate: create or load
//! a buffer, resize it, draw it, encode it, read it back.
