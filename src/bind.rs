//! Binding coordinator - Attach views to natives, hand back releasables.
//!
//! Two families of operation:
//!
//! - **Bind to existing**: [`bind_to_handle`] resolves and coerces an
//!   arbitrary platform handle to the required type, then binds the view to
//!   it.
//! - **Create and bind**: [`create_bound_native`] asks the view itself for a
//!   fresh native object (no coercion needed - it is guaranteed fresh) and
//!   binds it. [`create_bound_display`] and [`create_bound_root`] adjust the
//!   shape of what comes back, unwrapping or wrapping root-owning handles.
//!
//! Every successful bind returns a [`Bound`] carrying the native handle and
//! a one-shot [`ReleaseHandle`] whose teardown is the matching unbind. View
//! failures propagate unchanged; the coordinator never swallows them.

use std::rc::Rc;

use tracing::debug;

use crate::platform::Platform;
use crate::release::ReleaseHandle;
use crate::resolve::{native_of_type, resolve};
use crate::types::{BindError, BindOptions, NativeType};
use crate::view::View;

/// One successful bind: the native object the view is attached to, plus the
/// release handle that tears the attachment down exactly once.
///
/// The caller that receives a `Bound` is solely responsible for invoking
/// `release`; there is no finalizer-based fallback.
pub struct Bound<P: Platform> {
    pub native: P::Handle,
    pub release: ReleaseHandle,
}

impl<P: Platform> std::fmt::Debug for Bound<P>
where
    P::Handle: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bound")
            .field("native", &self.native)
            .field("release", &self.release)
            .finish()
    }
}

fn unbind_on_release<P: Platform>(view: &Rc<dyn View<P>>) -> ReleaseHandle {
    let view = Rc::clone(view);
    ReleaseHandle::new(move || view.unbind_from_native())
}

/// Bind a view to an existing platform handle.
///
/// The handle is resolved to its display object ([`BindError::NotFound`]
/// when there is none) and coerced to `required`, then the view binds to the
/// result with the given options.
pub fn bind_to_handle<P: Platform>(
    platform: &P,
    handle: &P::Handle,
    required: NativeType,
    view: &Rc<dyn View<P>>,
    options: BindOptions,
) -> Result<Bound<P>, BindError> {
    let native = native_of_type(platform, handle, required)?;
    view.bind_to_native(&native, options)?;
    debug!(native = %platform.type_of(&native), "bound view to existing native object");
    Ok(Bound {
        native,
        release: unbind_on_release(view),
    })
}

/// Create a fresh native object from the view's own factory capability and
/// bind the view to it.
pub fn create_bound_native<P: Platform>(
    view: &Rc<dyn View<P>>,
    cx: &P::Context,
    options: BindOptions,
) -> Result<Bound<P>, BindError> {
    let native = view.create_native(cx);
    view.bind_to_native(&native, options)?;
    debug!(preferred = %view.preferred_native_type(), "bound view to freshly created native object");
    Ok(Bound {
        native,
        release: unbind_on_release(view),
    })
}

/// As [`create_bound_native`], but guarantee the returned handle is a bare
/// display object: a view that produces a root-owning wrapper hands back the
/// wrapper's root instead.
pub fn create_bound_display<P: Platform>(
    platform: &P,
    view: &Rc<dyn View<P>>,
    cx: &P::Context,
    options: BindOptions,
) -> Result<Bound<P>, BindError> {
    let bound = create_bound_native(view, cx, options)?;
    if platform.is_display(&bound.native) {
        return Ok(bound);
    }
    let display = resolve(platform, &bound.native).ok_or(BindError::NotFound)?;
    Ok(Bound {
        native: display,
        release: bound.release,
    })
}

/// As [`create_bound_native`], but guarantee the returned handle is a
/// root-owning wrapper: a view that produces a bare display object gets it
/// wrapped through the platform's [`wrap_in_root`] capability.
///
/// [`wrap_in_root`]: crate::platform::Platform::wrap_in_root
pub fn create_bound_root<P: Platform>(
    platform: &P,
    view: &Rc<dyn View<P>>,
    cx: &P::Context,
    options: BindOptions,
) -> Result<Bound<P>, BindError> {
    let bound = create_bound_native(view, cx, options)?;
    if platform.is_root_wrapper(&bound.native) {
        return Ok(bound);
    }
    if platform.is_display(&bound.native) {
        let wrapper = platform.wrap_in_root(&bound.native)?;
        return Ok(Bound {
            native: wrapper,
            release: bound.release,
        });
    }
    Err(BindError::NotFound)
}

// =============================================================================
// Tests
// =============================================================================
