//! Integration tests for the public API of the core crate.
//!
//! These go through `Mapper` exactly as a downstream crate would, with
//! structs derived by `transcribe-macros`.

// `#[derive(Reflect)]` expands to paths under `::transcribe`.
extern crate transcribe_core as transcribe;

use pretty_assertions::assert_eq;
use transcribe::mapping::fields::collect_fields;
use transcribe::{Error, Kind, Mapper, MapperOptions, Reflect, ReflectRef, Scalar, Ty, Typed};
use transcribe_macros::Reflect;

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Address {
    street: String,
    number: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Customer {
    name: String,
    #[transcribe(flatten)]
    address: Address,
    tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct CustomerRow {
    name: String,
    street: String,
    number: i32,
    tags: Option<Vec<String>>,
}

#[test]
fn test_flattened_struct_into_flat_row() {
    let customer = Customer {
        name: "Ada".into(),
        address: Address {
            street: "Main".into(),
            number: 7,
        },
        tags: vec!["vip".into()],
    };

    let row: CustomerRow = Mapper::new().map_new(&customer).unwrap();

    assert_eq!(
        row,
        CustomerRow {
            name: "Ada".into(),
            street: "Main".into(),
            number: 7,
            tags: Some(vec!["vip".into()]),
        }
    );
}

#[test]
fn test_map_dyn_with_erased_values() {
    let src: Box<dyn Reflect> = Box::new(3.9f64);
    let mut dst: Box<dyn Reflect> = Box::new(0u32);

    Mapper::new().map_dyn(&mut *dst, &*src).unwrap();

    assert_eq!(dst.as_any().downcast_ref::<u32>(), Some(&3));
}

#[test]
fn test_descriptors_are_exposed() {
    let ty: Ty = Customer::descriptor();
    assert_eq!(ty.kind(), Kind::Struct);
    assert_eq!(u16::descriptor().kind(), Kind::Primitive(Scalar::U16));
    assert_eq!(Vec::<String>::descriptor().kind(), Kind::Sequence);

    let customer = Customer::default();
    let ReflectRef::Struct(view) = customer.reflect_ref() else {
        panic!("expected struct view");
    };
    let names: Vec<_> = collect_fields(view).keys().copied().collect();
    assert_eq!(names, vec!["name", "street", "number", "tags"]);
}

#[test]
fn test_depth_limit_is_an_error_not_a_crash() {
    let nested = vec![vec![vec![1u8]]];
    let mapper = Mapper::with_options(MapperOptions { max_depth: Some(2) });

    let mut out: Vec<Vec<Vec<u8>>> = Vec::new();
    mapper.map(&mut out, &nested).unwrap();
    assert_eq!(out, nested);

    // Differing element types force a walk three levels down.
    let mut out: Vec<Vec<Vec<i64>>> = Vec::new();
    let err = mapper.map(&mut out, &nested).unwrap_err();
    assert!(matches!(err, Error::DepthExceeded { limit: 2 }));
    assert_eq!(err.to_string(), "mapping exceeded the maximum depth of 2");
}

#[test]
fn test_mapper_debug_lists_registered_functions() {
    let mut mapper = Mapper::new();
    mapper
        .register_conversion(|n: &u16| i32::from(*n))
        .register_inspection(|_: &mut i32| {});

    let debug = format!("{mapper:?}");
    assert!(debug.contains("conversions: 1"), "{debug}");
    assert!(debug.contains("inspections: 1"), "{debug}");
    assert_eq!(mapper.options(), &MapperOptions::default());
}
