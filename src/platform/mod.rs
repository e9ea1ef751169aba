//! Platform adapters - The per-platform seam of the binding protocol.
//!
//! The resolve/coerce algorithm shape lives once, in
//! [`resolve`](crate::resolve); what varies per platform is the small set of
//! leaf predicates and mutations defined here. An Android adapter answers
//! "is this a `ViewGroup`", an Apple adapter answers "is this a view
//! controller that owns a root view", and both reuse the same core.
//!
//! The crate ships one adapter, [`headless`], which models exactly what the
//! protocol touches (type lattice, containment, construction context,
//! constraint pinning) with no real toolkit behind it.

pub mod headless;

use crate::types::{BindError, NativeType};

/// Capability set a host platform supplies to the core.
///
/// All operations run synchronously on the thread that owns the native
/// object tree; adapters use interior mutability rather than `&mut self`
/// because handles routinely alias their own tree.
pub trait Platform: 'static {
    /// Opaque reference to a platform object. Cloning must hand out another
    /// reference to the *same* object, never a copy of it.
    type Handle: Clone;

    /// Ambient state required to construct native objects (an owning
    /// environment reference on Android-like platforms; unit-like where
    /// objects construct context-free).
    type Context;

    /// Is this handle itself a leaf or container display object?
    fn is_display(&self, handle: &Self::Handle) -> bool;

    /// Is this handle a screen/controller-like wrapper that owns at most one
    /// root display object?
    fn is_root_wrapper(&self, handle: &Self::Handle) -> bool;

    /// The root display object a wrapper currently owns, if any.
    fn owned_root(&self, handle: &Self::Handle) -> Option<Self::Handle>;

    /// The concrete type of a native object.
    fn type_of(&self, native: &Self::Handle) -> NativeType;

    /// Whether a `concrete` object satisfies a `required` type (equal, or a
    /// subtype/implementation of it).
    fn satisfies(&self, concrete: NativeType, required: NativeType) -> bool;

    /// Whether this native object can hold children.
    fn is_container(&self, native: &Self::Handle) -> bool;

    /// The construction context inherited from an existing native object.
    fn context_of(&self, native: &Self::Handle) -> Self::Context;

    /// Construct a fresh, un-attached native object of type `ty`.
    fn create(&self, ty: NativeType, cx: &Self::Context) -> Result<Self::Handle, BindError>;

    /// Insert `child` into `parent`'s subtree. `parent` is guaranteed to be
    /// a container by the time the core calls this.
    fn insert_child(&self, parent: &Self::Handle, child: &Self::Handle);

    /// Pin `child`'s four edges to `parent`'s edges so the child covers the
    /// region `parent` occupies. Best effort: the original content of
    /// `parent` is neither hidden nor resized away.
    fn pin_to_edges(&self, parent: &Self::Handle, child: &Self::Handle);

    /// Wrap a bare display object in a root-owning wrapper (a view
    /// controller, a screen). Platforms without the concept keep the
    /// default.
    fn wrap_in_root(&self, display: &Self::Handle) -> Result<Self::Handle, BindError> {
        let _ = display;
        Err(BindError::Unsupported("root-owning wrappers"))
    }
}
