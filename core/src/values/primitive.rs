use transcribe_types::{Kind, Scalar, Ty};

use super::{Reflect, Typed, reflect_methods};

/// A scalar value read out of a [`Primitive`], widened to a common carrier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Bool(bool),
    Int(i128),
    UInt(u128),
    Float(f64),
    Char(char),
    Str(&'a str),
}

/// View of a scalar value.
pub trait Primitive: Reflect {
    fn literal(&self) -> Literal<'_>;

    /// Overwrite `self` with `literal` converted to this type.
    ///
    /// Returns `false` and leaves `self` untouched if the literal cannot be
    /// represented. Callers are expected to have checked
    /// [`Scalar::can_cast_to`] first.
    fn cast_from(&mut self, literal: &Literal<'_>) -> bool;
}

macro_rules! impl_scalar {
    ($($ty:ty => $scalar:ident),* $(,)?) => {
        $(
            impl Typed for $ty {
                fn descriptor() -> Ty {
                    Ty::of::<$ty>(Kind::Primitive(Scalar::$scalar))
                }
            }

            impl Reflect for $ty {
                reflect_methods!(Primitive);
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
    String => String,
}

macro_rules! impl_integer {
    ($carrier:ident: $($ty:ty),*) => {
        $(
            impl Primitive for $ty {
                fn literal(&self) -> Literal<'_> {
                    Literal::$carrier((*self).into())
                }

                fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
                    *self = match *literal {
                        Literal::Int(value) => value as $ty,
                        Literal::UInt(value) => value as $ty,
                        Literal::Float(value) => value as $ty,
                        Literal::Bool(value) => u8::from(value) as $ty,
                        Literal::Char(value) => u32::from(value) as $ty,
                        Literal::Str(_) => return false,
                    };
                    true
                }
            }
        )*
    };
}

impl_integer!(Int: i8, i16, i32, i64, i128);
impl_integer!(UInt: u8, u16, u32, u64, u128);

// `isize`/`usize` have no lossless `From` into the 128-bit carriers.
impl Primitive for isize {
    fn literal(&self) -> Literal<'_> {
        Literal::Int(*self as i128)
    }

    fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
        let mut value = *self as i64;
        if !value.cast_from(literal) {
            return false;
        }
        *self = value as isize;
        true
    }
}

impl Primitive for usize {
    fn literal(&self) -> Literal<'_> {
        Literal::UInt(*self as u128)
    }

    fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
        let mut value = *self as u64;
        if !value.cast_from(literal) {
            return false;
        }
        *self = value as usize;
        true
    }
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Primitive for $ty {
                fn literal(&self) -> Literal<'_> {
                    Literal::Float((*self).into())
                }

                fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
                    *self = match *literal {
                        Literal::Int(value) => value as $ty,
                        Literal::UInt(value) => value as $ty,
                        Literal::Float(value) => value as $ty,
                        Literal::Bool(_) | Literal::Char(_) | Literal::Str(_) => return false,
                    };
                    true
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl Primitive for bool {
    fn literal(&self) -> Literal<'_> {
        Literal::Bool(*self)
    }

    fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
        match *literal {
            Literal::Bool(value) => {
                *self = value;
                true
            }
            _ => false,
        }
    }
}

impl Primitive for char {
    fn literal(&self) -> Literal<'_> {
        Literal::Char(*self)
    }

    fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
        let value = match *literal {
            Literal::Char(value) => value,
            Literal::UInt(value) => match u8::try_from(value) {
                Ok(byte) => char::from(byte),
                Err(_) => return false,
            },
            _ => return false,
        };
        *self = value;
        true
    }
}

impl Primitive for String {
    fn literal(&self) -> Literal<'_> {
        Literal::Str(self.as_str())
    }

    fn cast_from(&mut self, literal: &Literal<'_>) -> bool {
        match *literal {
            Literal::Str(value) => {
                self.clear();
                self.push_str(value);
                true
            }
            Literal::Char(value) => {
                self.clear();
                self.push(value);
                true
            }
            _ => false,
        }
    }
}
