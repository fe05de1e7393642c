//! Test: Enums have no named fields to match and are rejected.

use transcribe::Reflect;

#[derive(Clone, Default, Reflect)]
enum Status {
    #[default]
    Active,
    Closed,
}

fn main() {}
