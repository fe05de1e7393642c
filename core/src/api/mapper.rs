use crate::api::{Error, MapperOptions};
use crate::mapping;
use crate::registry::{IntoConversion, IntoInspection, Registry};
use crate::values::{Reflect, Typed};

/// Copies values between types by matching their structure.
///
/// A `Mapper` owns a set of conversion and inspection functions that are
/// consulted at every node of a mapping. Register them up front, then share the
/// mapper: mapping only reads the registry, so `&Mapper` can be used from
/// several threads at once.
///
/// # Example
///
/// ```ignore
/// use transcribe::{Mapper, Reflect};
///
/// #[derive(Clone, Default, Reflect)]
/// struct Product {
///     name: String,
///     price: f64,
/// }
///
/// #[derive(Clone, Debug, Default, PartialEq, Reflect)]
/// struct ProductDto {
///     name: String,
///     price: i64,
/// }
///
/// let mapper = Mapper::new();
/// let product = Product { name: "Shoes".into(), price: 17.3 };
///
/// let dto: ProductDto = mapper.map_new(&product).unwrap();
/// assert_eq!(dto, ProductDto { name: "Shoes".into(), price: 17 });
/// ```
#[derive(Default)]
pub struct Mapper {
    pub(crate) registry: Registry,
    pub(crate) options: MapperOptions,
}

static_assertions::assert_impl_all!(Mapper: Send, Sync);

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MapperOptions) -> Self {
        Self {
            registry: Registry::default(),
            options,
        }
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Register a function that turns one type into another.
    ///
    /// The function is used whenever a value of its parameter type is mapped
    /// into a slot of its return type, taking priority over every built-in
    /// rule. Registering a second function for the same pair of types replaces
    /// the first.
    ///
    /// See [`IntoConversion`] for the accepted signatures.
    pub fn register_conversion<M, F: IntoConversion<M>>(&mut self, f: F) -> &mut Self {
        self.registry.insert_conversion(f.into_conversion());
        self
    }

    /// Register a function that post-processes a destination value after it
    /// has been populated.
    ///
    /// Several inspections may be registered for the same types; they run in
    /// registration order and the first error stops the mapping.
    ///
    /// See [`IntoInspection`] for the accepted signatures.
    pub fn register_inspection<M, F: IntoInspection<M>>(&mut self, f: F) -> &mut Self {
        self.registry.insert_inspection(f.into_inspection());
        self
    }

    /// Whether any conversion or inspection has been registered.
    pub fn has_custom_functions(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Map `src` into `dst`.
    ///
    /// Fields of `dst` with no counterpart in `src` keep their current value.
    /// On error `dst` may have been partially written.
    pub fn map<D: Reflect, S: Reflect>(&self, dst: &mut D, src: &S) -> Result<(), Error> {
        self.map_dyn(dst, src)
    }

    /// [`map`](Mapper::map) for values that are already type-erased.
    pub fn map_dyn(&self, dst: &mut dyn Reflect, src: &dyn Reflect) -> Result<(), Error> {
        tracing::trace!(dst = dst.ty().name(), src = src.ty().name(), "Mapping");
        mapping::map_value(self, dst, src, 0)
    }

    /// Map `src` into a fresh default `D` and return it.
    pub fn map_new<D: Typed + Default, S: Reflect>(&self, src: &S) -> Result<D, Error> {
        let mut dst = D::default();
        self.map(&mut dst, src)?;
        Ok(dst)
    }
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("registry", &self.registry)
            .field("options", &self.options)
            .finish()
    }
}

/// Map `src` into `dst` with a mapper that has no custom functions.
pub fn map<D: Reflect, S: Reflect>(dst: &mut D, src: &S) -> Result<(), Error> {
    Mapper::default().map(dst, src)
}
