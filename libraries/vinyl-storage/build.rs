//! Build script for vinyl-storage.
//!
//! This script ensures the crate is rebuilt when the embedded schema changes.

fn main() {
    // Trigger rebuild when the schema changes
    println!("cargo:rerun-if-changed=schema");
}
