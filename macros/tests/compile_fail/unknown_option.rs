//! Test: A misspelled field option should produce a helpful error.

use transcribe::Reflect;

#[derive(Clone, Default, Reflect)]
struct Audit {
    created_by: String,
}

#[derive(Clone, Default, Reflect)]
struct Product {
    name: String,
    #[transcribe(flaten)]
    audit: Audit,
}

fn main() {}
