//! Tests for `#[derive(Reflect)]`

use pretty_assertions::assert_eq;
use transcribe::{FieldInfo, FieldRole, Kind, Reflect, ReflectMut, ReflectRef, Struct, Typed};

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Audit {
    created_by: String,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Product {
    name: String,
    price: f64,
    #[transcribe(flatten)]
    audit: Audit,
    #[transcribe(ignore)]
    cached: NotReflect,
    r#type: u8,
}

/// Only usable in ignored fields.
#[derive(Clone, Debug, Default, PartialEq)]
struct NotReflect;

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Marker;

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Wrapper<T> {
    inner: T,
    items: Vec<T>,
}

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
struct Stacked {
    #[transcribe(flatten)]
    #[transcribe(ignore)]
    audit: Audit,
    #[transcribe(flatten, ignore)]
    other: Audit,
}

fn view(value: &dyn Reflect) -> &dyn Struct {
    match value.reflect_ref() {
        ReflectRef::Struct(view) => view,
        _ => panic!("expected struct view"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_field_metadata_in_declaration_order() {
    let product = Product::default();
    assert_eq!(
        view(&product).fields(),
        &[
            FieldInfo::new("name", FieldRole::Named),
            FieldInfo::new("price", FieldRole::Named),
            FieldInfo::new("audit", FieldRole::Embedded),
            FieldInfo::new("cached", FieldRole::Ignored),
            FieldInfo::new("type", FieldRole::Named),
        ]
    );
}

#[test]
fn test_descriptor_is_struct_kind() {
    assert_eq!(Product::descriptor().kind(), Kind::Struct);
    assert!(Product::descriptor().is::<Product>());
    assert_eq!(Product::default().ty(), Product::descriptor());
}

#[test]
fn test_field_accessors_skip_ignored() {
    let product = Product {
        name: "Shoes".into(),
        price: 17.3,
        ..Product::default()
    };
    let fields = view(&product);

    let name = fields.field(0).and_then(|f| f.as_any().downcast_ref::<String>());
    assert_eq!(name.map(String::as_str), Some("Shoes"));
    assert!(fields.field(3).is_none());
    assert!(fields.field(4).is_some());
    assert!(fields.field(5).is_none());
}

#[test]
fn test_field_mut_writes_through() {
    let mut product = Product::default();
    let ReflectMut::Struct(fields) = product.reflect_mut() else {
        panic!("expected struct view");
    };
    let price = fields.field_mut(1).expect("price is visible");
    assert!(price.assign(&9.5f64));
    assert_eq!(product.price, 9.5);
}

#[test]
fn test_assign_clones_same_type() {
    let source = Audit {
        created_by: "ada".into(),
    };
    let mut target = Audit::default();
    assert!(target.assign(&source));
    assert_eq!(target, source);
    assert!(!target.assign(&Marker));
}

#[test]
fn test_unit_struct_has_no_fields() {
    assert!(view(&Marker).fields().is_empty());
    assert!(view(&Marker).field(0).is_none());
}

#[test]
fn test_generic_struct() {
    let wrapper = Wrapper {
        inner: 3i32,
        items: vec![1, 2],
    };
    let fields = view(&wrapper);
    assert_eq!(fields.fields().len(), 2);
    assert_eq!(
        fields.field(1).map(|f| f.ty()),
        Some(Vec::<i32>::descriptor())
    );
    assert_ne!(Wrapper::<i32>::descriptor(), Wrapper::<i64>::descriptor());
}

#[test]
fn test_options_accumulate_across_attributes() {
    let roles: Vec<_> = view(&Stacked::default())
        .fields()
        .iter()
        .map(|f| f.role())
        .collect();
    assert_eq!(roles, vec![FieldRole::Ignored, FieldRole::Ignored]);
}
