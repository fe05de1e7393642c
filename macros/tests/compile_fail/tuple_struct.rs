//! Test: Tuple struct fields have no names to match by.

use transcribe::Reflect;

#[derive(Clone, Default, Reflect)]
struct Point(i32, i32);

fn main() {}
