//! Core types - Type tags, bind options, and the error taxonomy.
//!
//! Everything here is platform-independent. Platform adapters attach meaning
//! to `NativeType` tags through their type table and factory registry; the
//! core only ever compares and displays them.

use std::fmt;

// =============================================================================
// Native Type Tags
// =============================================================================

/// Descriptor for a concrete native type.
///
/// A lightweight tag standing in for a platform class (`Panel`, `Button`,
/// `UILabel`, ...). Subtype relations are not encoded in the tag itself;
/// they live in the platform's [`TypeTable`](crate::registry::TypeTable).
///
/// Tags compare by name, so two adapters can agree on a type without sharing
/// a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeType(&'static str);

impl NativeType {
    /// Create a type tag from its platform class name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The platform class name this tag stands for.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// =============================================================================
// Bind Options (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Overrides to the default behavior of a bind.
    ///
    /// Combine with bitwise OR: `BindOptions::PRESERVE_NATIVE_PROPERTIES | ...`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BindOptions: u8 {
        /// Read the native object's current properties into the view instead
        /// of pushing the view's state onto the native object.
        ///
        /// Convenient when binding to fully initialized native views coming
        /// out of a layout file or storyboard.
        const PRESERVE_NATIVE_PROPERTIES = 1 << 0;
    }
}

// =============================================================================
// Edge Pin Metadata (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which edges of a synthesized child are pinned to its container.
    ///
    /// Platforms with a geometric constraint system record `Edges::all()`
    /// after a full-cover insertion; platforms without one leave this empty.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failures surfaced by resolution, coercion, and binding.
///
/// All variants are detected synchronously and reported immediately; nothing
/// in this protocol retries or recovers silently. The one absence that is
/// *not* an error is [`resolve`](crate::resolve::resolve) finding nothing,
/// which is an `Option` so callers can treat "nothing here yet" as a normal
/// branch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// No native object could be located from the given handle.
    #[error("no native view could be resolved from the given handle")]
    NotFound,

    /// A native object exists but is a non-container leaf of the wrong type,
    /// so nothing can be synthesized inside it.
    #[error("cannot coerce a {found} into a {required}: a {found} cannot hold children")]
    IncompatibleNative {
        found: NativeType,
        required: NativeType,
    },

    /// The synthesis path was asked for a type no factory is registered for.
    #[error("no factory registered for native type {0}")]
    UnknownNativeType(NativeType),

    /// A view was bound twice without an intervening unbind. This is a
    /// usage-contract violation by the caller, not an environment fault.
    #[error("view is already bound to a native object")]
    AlreadyBound,

    /// The platform adapter does not model the requested capability.
    #[error("platform does not support {0}")]
    Unsupported(&'static str),
}

// =============================================================================
// Tests
// =============================================================================
