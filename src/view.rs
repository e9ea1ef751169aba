//! View trait - The capability surface abstract views expose to the core.
//!
//! Concrete view libraries (buttons, labels, containers, their property-sync
//! logic) live outside this crate; the binding coordinator drives them only
//! through these four capability points.

use crate::platform::Platform;
use crate::types::{BindError, BindOptions, NativeType};

/// A cross-platform view, polymorphic over the platform it binds on.
///
/// At most one view may be actively bound to a given native object at a
/// time, and a view holds at most one active binding. The coordinator does
/// not track this globally; implementations enforce it and report a second
/// bind without an intervening unbind as [`BindError::AlreadyBound`].
pub trait View<P: Platform> {
    /// The concrete native type this view prefers to bind to. Consulted by
    /// the create-and-bind path only.
    fn preferred_native_type(&self) -> NativeType;

    /// Create a fresh, un-bound native object compatible with this view.
    ///
    /// Must not fail for a valid context; the object comes back un-attached
    /// and un-bound.
    fn create_native(&self, cx: &P::Context) -> P::Handle;

    /// Attach this view's state and behavior to a native object.
    ///
    /// Safe to call on a fresh or pre-existing native object. With
    /// [`BindOptions::PRESERVE_NATIVE_PROPERTIES`] the view reads the native
    /// object's current properties into its own state; otherwise the view's
    /// declared state is pushed onto the native object.
    fn bind_to_native(&self, native: &P::Handle, options: BindOptions) -> Result<(), BindError>;

    /// Detach this view's prior binding.
    fn unbind_from_native(&self);
}
