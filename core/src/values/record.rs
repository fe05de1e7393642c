use super::Reflect;

/// How a struct field takes part in mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    /// Matched by its own name.
    Named,
    /// Marked `#[transcribe(flatten)]`: if the field is itself a struct, its
    /// fields are matched as though they were declared on the outer struct.
    Embedded,
    /// Marked `#[transcribe(ignore)]`: never read or written.
    Ignored,
}

/// Static description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    name: &'static str,
    role: FieldRole,
}

impl FieldInfo {
    pub const fn new(name: &'static str, role: FieldRole) -> Self {
        Self { name, role }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn role(&self) -> FieldRole {
        self.role
    }
}

/// View of a struct with named fields.
///
/// Fields are addressed by their declaration index into [`Struct::fields`].
pub trait Struct: Reflect {
    fn fields(&self) -> &'static [FieldInfo];

    /// The field at `index`, or `None` if it is out of range or ignored.
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}
