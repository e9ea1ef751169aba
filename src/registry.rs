//! Registries - Typed native factories and the subtype table.
//!
//! Platforms that resolve types reflectively ("is this the right runtime
//! class", "instantiate by class descriptor") are modeled here without
//! reflection: a [`FactoryRegistry`] maps type tags to construction closures,
//! and a [`TypeTable`] records the subtype lattice those tags live in.
//!
//! Both are owned by the platform adapter; the core algorithms only consume
//! them through the [`Platform`](crate::platform::Platform) trait.

use std::collections::HashMap;

use crate::platform::Platform;
use crate::types::{BindError, NativeType};

// =============================================================================
// Factory Registry
// =============================================================================

type Factory<P> = Box<dyn Fn(&<P as Platform>::Context) -> <P as Platform>::Handle>;

/// Typed registry of native object factories, keyed by type tag.
///
/// Each concrete native kind registers one factory taking the platform's
/// construction context. The synthesis path of
/// [`coerce`](crate::resolve::coerce) looks factories up here; a miss is
/// [`BindError::UnknownNativeType`] and aborts the coercion before any tree
/// mutation happens.
pub struct FactoryRegistry<P: Platform> {
    factories: HashMap<NativeType, Factory<P>>,
}

impl<P: Platform> FactoryRegistry<P> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register the factory for a native type, replacing any earlier one.
    pub fn register(
        &mut self,
        ty: NativeType,
        factory: impl Fn(&P::Context) -> P::Handle + 'static,
    ) {
        self.factories.insert(ty, Box::new(factory));
    }

    /// Whether a factory is registered for `ty`.
    pub fn contains(&self, ty: NativeType) -> bool {
        self.factories.contains_key(&ty)
    }

    /// Construct a fresh, un-attached native object of type `ty`.
    pub fn create(&self, ty: NativeType, cx: &P::Context) -> Result<P::Handle, BindError> {
        match self.factories.get(&ty) {
            Some(factory) => Ok(factory(cx)),
            None => Err(BindError::UnknownNativeType(ty)),
        }
    }
}

impl<P: Platform> Default for FactoryRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Type Table
// =============================================================================

/// Subtype lattice over [`NativeType`] tags.
///
/// Each entry links a type to its direct supertype. `satisfies` walks the
/// ancestor chain, so a `Button` registered under `View` satisfies a
/// required `View`. Types the table has never seen satisfy only themselves.
#[derive(Debug, Default)]
pub struct TypeTable {
    parents: HashMap<NativeType, NativeType>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Record `ty` as a direct subtype of `parent`.
    pub fn insert_subtype(&mut self, ty: NativeType, parent: NativeType) {
        self.parents.insert(ty, parent);
    }

    /// Whether a `concrete` object can stand in where `required` is asked
    /// for: the tags are equal, or `required` is an ancestor of `concrete`.
    pub fn satisfies(&self, concrete: NativeType, required: NativeType) -> bool {
        let mut current = Some(concrete);
        while let Some(ty) = current {
            if ty == required {
                return true;
            }
            current = self.parents.get(&ty).copied();
        }
        false
    }
}

// =============================================================================
// Tests
// =============================================================================
