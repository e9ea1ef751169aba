//! Native resolution - Locate or synthesize an object of a required type.
//!
//! Three operations, layered:
//!
//! - [`resolve`] turns an arbitrary handle into the display object behind
//!   it, or nothing. Absence is an `Option`, not an error, because "nothing
//!   here yet" is a normal branch for most callers.
//! - [`coerce`] turns a display object into one of a required concrete type:
//!   by identity when the type already satisfies, by synthesizing a covering
//!   child when the object is a container, and by failing when it is an
//!   unrelated leaf.
//! - [`native_of_type`] chains the two, hardening absence into
//!   [`BindError::NotFound`].
//!
//! Callers get both the "lookup existing" and "create new" paths behind one
//! call; the branch lives once, here, instead of at every call site.

use tracing::{debug, trace};

use crate::platform::Platform;
use crate::types::{BindError, NativeType};

/// Find the display object behind an arbitrary platform handle.
///
/// Identity case first: a display object resolves to itself. A root-owning
/// wrapper (activity, view controller, screen) resolves to its root, and a
/// wrapper that owns no root resolves to `None` - the caller decides whether
/// that is fatal. Anything else is `None`.
pub fn resolve<P: Platform>(platform: &P, handle: &P::Handle) -> Option<P::Handle> {
    if platform.is_display(handle) {
        trace!("resolve: handle is already a display object");
        return Some(handle.clone());
    }
    if platform.is_root_wrapper(handle) {
        trace!("resolve: unwrapping root-owning handle");
        return platform.owned_root(handle);
    }
    trace!("resolve: handle holds no display object");
    None
}

/// Return a native object satisfying `required`, starting from `native`.
///
/// - Already the right type (equal or subtype): `native` comes back
///   unchanged - no allocation, no mutation.
/// - Otherwise `native` must be a container; a leaf of the wrong type is
///   [`BindError::IncompatibleNative`].
/// - Otherwise a fresh object of `required` is synthesized with the
///   container's own construction context, inserted as a child, and pinned
///   to all four container edges so it covers the container's region. The
///   synthesized child is returned, not the container.
///
/// Nothing is created unless the container check has already passed, and a
/// factory miss aborts before any tree mutation, so a failed coercion never
/// leaves the native tree partially changed. The cover itself is best
/// effort: the container's existing content is neither hidden nor resized
/// away underneath the new child.
pub fn coerce<P: Platform>(
    platform: &P,
    native: &P::Handle,
    required: NativeType,
) -> Result<P::Handle, BindError> {
    let concrete = platform.type_of(native);
    if platform.satisfies(concrete, required) {
        trace!(concrete = %concrete, required = %required, "coerce: identity");
        return Ok(native.clone());
    }

    if !platform.is_container(native) {
        return Err(BindError::IncompatibleNative {
            found: concrete,
            required,
        });
    }

    let cx = platform.context_of(native);
    let child = platform.create(required, &cx)?;
    platform.insert_child(native, &child);
    platform.pin_to_edges(native, &child);
    debug!(container = %concrete, synthesized = %required, "coerce: synthesized covering child");
    Ok(child)
}

/// Resolve `handle` to a display object and coerce it to `required`.
///
/// The one operation most callers want: absence of any display object is
/// [`BindError::NotFound`], everything else follows [`coerce`].
pub fn native_of_type<P: Platform>(
    platform: &P,
    handle: &P::Handle,
    required: NativeType,
) -> Result<P::Handle, BindError> {
    let native = resolve(platform, handle).ok_or(BindError::NotFound)?;
    coerce(platform, &native, required)
}

// =============================================================================
// Tests
// =============================================================================
