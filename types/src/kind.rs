/// Coarse category of a type, used by the dispatcher to pick a mapping rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Scalar types (bool, integers, floats, char, String)
    Primitive(Scalar),

    /// Pointer or optional value (`Option<T>`, `Box<T>`)
    Pointer,

    /// Struct with named fields
    Struct,

    /// Ordered sequence of elements (`Vec<T>`, `VecDeque<T>`)
    Sequence,

    /// Associative map (`HashMap<K, V>`, `BTreeMap<K, V>`)
    Map,
}

impl Kind {
    /// Struct, Sequence and Map are composite; Primitive and Pointer are not.
    pub fn is_composite(self) -> bool {
        matches!(self, Kind::Struct | Kind::Sequence | Kind::Map)
    }

    pub fn is_sequence(self) -> bool {
        matches!(self, Kind::Sequence)
    }

    /// The scalar type, if this is a primitive kind.
    pub fn scalar(self) -> Option<Scalar> {
        match self {
            Kind::Primitive(scalar) => Some(scalar),
            _ => None,
        }
    }
}

/// Scalar type variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Char,
    String,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Class {
    Bool,
    Integer,
    Float,
    Char,
    String,
}

impl Scalar {
    fn class(self) -> Class {
        match self {
            Scalar::Bool => Class::Bool,
            Scalar::I8
            | Scalar::I16
            | Scalar::I32
            | Scalar::I64
            | Scalar::I128
            | Scalar::Isize
            | Scalar::U8
            | Scalar::U16
            | Scalar::U32
            | Scalar::U64
            | Scalar::U128
            | Scalar::Usize => Class::Integer,
            Scalar::F32 | Scalar::F64 => Class::Float,
            Scalar::Char => Class::Char,
            Scalar::String => Class::String,
        }
    }

    /// Whether a value of this scalar type can be converted into `target`.
    ///
    /// Mirrors what an `as` cast accepts between primitives: any numeric type
    /// into any other (floats truncate toward zero and saturate), `bool` and
    /// `char` into integers, `u8` into `char`. On top of that a `char` widens
    /// into a `String`.
    pub fn can_cast_to(self, target: Scalar) -> bool {
        if self == target {
            return true;
        }
        match (self.class(), target.class()) {
            (Class::Integer | Class::Float, Class::Integer | Class::Float) => true,
            (Class::Bool | Class::Char, Class::Integer) => true,
            (Class::Integer, Class::Char) => self == Scalar::U8,
            (Class::Char, Class::String) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_kinds() {
        assert!(Kind::Struct.is_composite());
        assert!(Kind::Sequence.is_composite());
        assert!(Kind::Map.is_composite());
        assert!(!Kind::Pointer.is_composite());
        assert!(!Kind::Primitive(Scalar::I32).is_composite());
    }

    #[test]
    fn test_numeric_casts() {
        assert!(Scalar::F32.can_cast_to(Scalar::I64));
        assert!(Scalar::U128.can_cast_to(Scalar::I8));
        assert!(Scalar::I16.can_cast_to(Scalar::F64));
        assert!(!Scalar::F64.can_cast_to(Scalar::Bool));
        assert!(!Scalar::I64.can_cast_to(Scalar::String));
    }

    #[test]
    fn test_bool_and_char_casts() {
        assert!(Scalar::Bool.can_cast_to(Scalar::U8));
        assert!(!Scalar::Bool.can_cast_to(Scalar::F32));
        assert!(!Scalar::I32.can_cast_to(Scalar::Bool));
        assert!(Scalar::Char.can_cast_to(Scalar::U32));
        assert!(Scalar::U8.can_cast_to(Scalar::Char));
        assert!(!Scalar::U32.can_cast_to(Scalar::Char));
        assert!(Scalar::Char.can_cast_to(Scalar::String));
        assert!(!Scalar::String.can_cast_to(Scalar::Char));
    }

    #[test]
    fn test_scalar_ord() {
        assert!(Scalar::Bool < Scalar::I8);
        assert!(Scalar::Usize < Scalar::F32);
        assert!(Scalar::Char < Scalar::String);
    }
}
