//! Test: Options are given as a list, not as `#[transcribe = ...]`.

use transcribe::Reflect;

#[derive(Clone, Default, Reflect)]
struct Product {
    #[transcribe = "ignore"]
    name: String,
}

fn main() {}
