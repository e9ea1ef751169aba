//! # crossview
//!
//! Cross-platform native view binding protocol for Rust.
//!
//! An abstract, platform-independent view description is attached to a
//! concrete platform-native UI object, so the same view logic can drive
//! different widget trees without a per-platform rewrite. This crate is the
//! protocol core: object identity resolution ("is this handle already the
//! right thing, or must one be created") and binding lifetime ("who owns the
//! attachment, when is it torn down"). Widget toolkits, rendering, and
//! concrete view libraries live outside it.
//!
//! ## Architecture
//!
//! ```text
//! Handle → resolve → display object → coerce → required native → bind → ReleaseHandle
//! ```
//!
//! - [`resolve`](resolve::resolve) / [`coerce`](resolve::coerce) unify
//!   heterogeneous platform shapes (leaf objects, containers, root-owning
//!   controllers) into one object-or-nothing result, synthesizing a covering
//!   child when the required type is absent.
//! - The binding coordinator ([`bind_to_handle`](bind::bind_to_handle) and
//!   the `create_bound_*` family) drives a [`View`](view::View) through its
//!   capability points and hands back a one-shot
//!   [`ReleaseHandle`](release::ReleaseHandle).
//! - Per-platform variation lives behind the
//!   [`Platform`](platform::Platform) trait; the crate ships a
//!   [`headless`](platform::headless) adapter for hosts and tests.
//!
//! All operations are synchronous and UI-thread-affine; nothing here spawns,
//! suspends, or retries.
//!
//! ## Modules
//!
//! - [`types`] - Type tags, [`BindOptions`], the error taxonomy
//! - [`release`] - The scoped-release primitive
//! - [`registry`] - Typed native factories and the subtype table
//! - [`resolve`] - Native object resolution and coercion
//! - [`bind`] - The binding coordinator
//! - [`view`] - The abstract view capability trait
//! - [`platform`] - The platform adapter seam and the headless adapter

pub mod bind;
pub mod platform;
pub mod registry;
pub mod release;
pub mod resolve;
pub mod types;
pub mod view;

// Re-export the public surface
pub use types::{BindError, BindOptions, Edges, NativeType};

pub use bind::{
    Bound, bind_to_handle, create_bound_display, create_bound_native, create_bound_root,
};
pub use platform::Platform;
pub use registry::{FactoryRegistry, TypeTable};
pub use release::ReleaseHandle;
pub use resolve::{coerce, native_of_type, resolve};
pub use view::View;
