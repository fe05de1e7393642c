//! Test: Borrowed structs cannot be mapped, values must be 'static.

use transcribe::Reflect;

#[derive(Clone, Default, Reflect)]
struct Label<'a> {
    text: &'a str,
}

fn main() {}
