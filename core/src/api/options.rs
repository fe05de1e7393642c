/// Configuration for a [`Mapper`](crate::Mapper).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapperOptions {
    /// Maximum nesting depth of a single `map` call.
    ///
    /// `None` (the default) leaves recursion unbounded, so a self-referential
    /// value graph will overflow the stack.
    pub max_depth: Option<usize>,
}

impl MapperOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
