use std::collections::{BTreeMap, HashMap};

use pretty_assertions::assert_eq;

use super::composite::{map_map, map_map_to_sequence, map_sequence, map_struct};
use crate::test_utils::init_test_logging;
use crate::values::{Map, Reflect, ReflectMut, ReflectRef, Sequence, Struct};
use crate::{Error, Mapper, NoValidMapping, Typed};

#[derive(Clone, Debug, Default, PartialEq, transcribe_macros::Reflect)]
struct Source {
    name: String,
    price: f64,
    only_in_source: bool,
}

#[derive(Clone, Debug, Default, PartialEq, transcribe_macros::Reflect)]
struct Target {
    name: String,
    price: i64,
    only_in_target: u8,
}

fn struct_mut(value: &mut dyn Reflect) -> &mut dyn Struct {
    match value.reflect_mut() {
        ReflectMut::Struct(view) => view,
        _ => panic!("expected struct view"),
    }
}

fn struct_ref(value: &dyn Reflect) -> &dyn Struct {
    match value.reflect_ref() {
        ReflectRef::Struct(view) => view,
        _ => panic!("expected struct view"),
    }
}

fn seq_mut(value: &mut dyn Reflect) -> &mut dyn Sequence {
    match value.reflect_mut() {
        ReflectMut::Sequence(view) => view,
        _ => panic!("expected sequence view"),
    }
}

fn seq_ref(value: &dyn Reflect) -> &dyn Sequence {
    match value.reflect_ref() {
        ReflectRef::Sequence(view) => view,
        _ => panic!("expected sequence view"),
    }
}

fn map_mut(value: &mut dyn Reflect) -> &mut dyn Map {
    match value.reflect_mut() {
        ReflectMut::Map(view) => view,
        _ => panic!("expected map view"),
    }
}

fn map_ref(value: &dyn Reflect) -> &dyn Map {
    match value.reflect_ref() {
        ReflectRef::Map(view) => view,
        _ => panic!("expected map view"),
    }
}

#[test]
fn test_struct_fields_match_by_name() {
    init_test_logging();
    let mapper = Mapper::new();
    let src = Source {
        name: "Shoes".into(),
        price: 17.3,
        only_in_source: true,
    };
    let mut dst = Target {
        only_in_target: 3,
        ..Target::default()
    };

    map_struct(&mapper, struct_mut(&mut dst), struct_ref(&src), 0).unwrap();

    assert_eq!(
        dst,
        Target {
            name: "Shoes".into(),
            price: 17,
            only_in_target: 3,
        }
    );
}

#[test]
fn test_sequence_is_resized_to_source() {
    let mapper = Mapper::new();
    let src = vec![1.5f64, 2.5, 3.5];
    let mut dst = vec![9i32; 10];

    map_sequence(&mapper, seq_mut(&mut dst), seq_ref(&src), 0).unwrap();

    assert_eq!(dst, vec![1, 2, 3]);
}

#[test]
fn test_sequence_stops_at_first_error() {
    let mapper = Mapper::new();
    let src = vec!["a".to_string()];
    let mut dst: Vec<i64> = Vec::new();

    let err = map_sequence(&mapper, seq_mut(&mut dst), seq_ref(&src), 0).unwrap_err();

    assert_eq!(
        err.no_valid_mapping(),
        Some(&NoValidMapping::new(i64::descriptor(), String::descriptor()))
    );
}

#[test]
fn test_map_maps_keys_and_values() {
    let mapper = Mapper::new();
    let src: HashMap<i32, f32> = HashMap::from([(1, 1.9), (2, 2.1)]);
    let mut dst: BTreeMap<i64, i8> = BTreeMap::from([(100, 100)]);

    map_map(&mapper, map_mut(&mut dst), map_ref(&src), 0).unwrap();

    assert_eq!(dst, BTreeMap::from([(1, 1), (2, 2)]));
}

#[test]
fn test_map_to_sequence_projects_values() {
    let mapper = Mapper::new();
    let src: HashMap<String, u16> = HashMap::from([("a".into(), 1), ("b".into(), 2)]);
    let mut dst: Vec<u64> = Vec::new();

    map_map_to_sequence(&mapper, seq_mut(&mut dst), map_ref(&src), 0).unwrap();

    dst.sort();
    assert_eq!(dst, vec![1, 2]);
}

#[test]
fn test_map_of_sequences_is_flattened() {
    let mapper = Mapper::new();
    let src: BTreeMap<u8, Vec<i32>> = BTreeMap::from([(1, vec![1, 2]), (2, vec![3]), (3, vec![])]);
    let mut dst: Vec<i64> = Vec::new();

    map_map_to_sequence(&mapper, seq_mut(&mut dst), map_ref(&src), 0).unwrap();

    assert_eq!(dst, vec![1, 2, 3]);
}

#[test]
fn test_failed_flatten_reports_projection_error() {
    let mapper = Mapper::new();
    let src: BTreeMap<u8, Vec<String>> = BTreeMap::from([(1, vec!["x".to_string()])]);
    let mut dst: Vec<i64> = Vec::new();

    let err = map_map_to_sequence(&mapper, seq_mut(&mut dst), map_ref(&src), 0).unwrap_err();

    // The projection tried `Vec<String>` into `i64`; flattening then tried
    // `String` into `i64`. Only the first failure is reported.
    assert!(matches!(
        err,
        Error::NoValidMapping(NoValidMapping { dst, src })
            if dst == i64::descriptor() && src == Vec::<String>::descriptor()
    ));
}
