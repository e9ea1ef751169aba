//! End-to-end binding scenarios against the headless platform.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crossview::platform::headless::{self, Controller, Env, Handle, Headless, Node};
use crossview::{
    BindError, BindOptions, Edges, NativeType, Platform, View, bind_to_handle, coerce,
    create_bound_display, create_bound_native, create_bound_root, native_of_type, resolve,
};

// =============================================================================
// Fixtures
// =============================================================================

/// A label-flavored view with reactive shadow state for its text property.
struct LabelView {
    text: Signal<String>,
    bound: RefCell<Option<Handle>>,
    unbinds: Cell<u32>,
}

impl LabelView {
    fn new(text: &str) -> Rc<Self> {
        Rc::new(Self {
            text: signal(text.to_string()),
            bound: RefCell::new(None),
            unbinds: Cell::new(0),
        })
    }
}

impl View<Headless> for LabelView {
    fn preferred_native_type(&self) -> NativeType {
        headless::LABEL
    }

    fn create_native(&self, cx: &Env) -> Handle {
        Handle::Node(Node::leaf(headless::LABEL, cx))
    }

    fn bind_to_native(&self, native: &Handle, options: BindOptions) -> Result<(), BindError> {
        if self.bound.borrow().is_some() {
            return Err(BindError::AlreadyBound);
        }
        let node = native.as_node().ok_or(BindError::NotFound)?;

        if options.contains(BindOptions::PRESERVE_NATIVE_PROPERTIES) {
            self.text.set(node.text().unwrap_or_default());
        } else {
            node.set_text(self.text.get());
        }

        *self.bound.borrow_mut() = Some(native.clone());
        Ok(())
    }

    fn unbind_from_native(&self) {
        *self.bound.borrow_mut() = None;
        self.unbinds.set(self.unbinds.get() + 1);
    }
}

/// A view whose native factory produces a controller owning a label, the way
/// screen-sized views do on controller-based platforms.
struct ScreenView {
    bound: RefCell<Option<Handle>>,
}

impl ScreenView {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            bound: RefCell::new(None),
        })
    }
}

impl View<Headless> for ScreenView {
    fn preferred_native_type(&self) -> NativeType {
        headless::CONTROLLER
    }

    fn create_native(&self, cx: &Env) -> Handle {
        let root = Node::container(headless::PANEL, cx);
        Handle::Controller(Controller::new(Some(root)))
    }

    fn bind_to_native(&self, native: &Handle, _options: BindOptions) -> Result<(), BindError> {
        if self.bound.borrow().is_some() {
            return Err(BindError::AlreadyBound);
        }
        *self.bound.borrow_mut() = Some(native.clone());
        Ok(())
    }

    fn unbind_from_native(&self) {
        *self.bound.borrow_mut() = None;
    }
}

// =============================================================================
// Resolution / Coercion Scenarios
// =============================================================================

#[test]
fn controller_owning_leaf_cannot_become_container() {
    let platform = Headless::new();
    let leaf = platform.new_node(headless::LABEL).unwrap();
    let controller = platform.new_controller(Some(&leaf));

    // The controller resolves to its leaf...
    assert_eq!(resolve(&platform, &controller), Some(leaf.clone()));

    // ...which neither satisfies Panel nor can hold a synthesized one.
    let err = native_of_type(&platform, &controller, headless::PANEL).unwrap_err();
    assert_eq!(
        err,
        BindError::IncompatibleNative {
            found: headless::LABEL,
            required: headless::PANEL,
        }
    );
}

#[test]
fn empty_panel_grows_a_covering_button() {
    let platform = Headless::new();
    let panel = platform.new_node(headless::PANEL).unwrap();

    let button = coerce(&platform, &panel, headless::BUTTON).unwrap();
    assert_eq!(platform.type_of(&button), headless::BUTTON);

    // Sole child of the panel, pinned on all four edges.
    let panel_node = panel.as_node().unwrap();
    assert_eq!(panel_node.child_count(), 1);
    assert_eq!(button.as_node().unwrap().pinned_edges(), Edges::all());

    // The synthesized child visually covers the panel.
    platform.compute_layout(&panel, 320.0, 240.0);
    let panel_bounds = platform.bounds_of(&panel).unwrap();
    let button_bounds = platform.bounds_of(&button).unwrap();
    assert_eq!((button_bounds.x, button_bounds.y), (0.0, 0.0));
    assert_eq!(button_bounds.width, panel_bounds.width);
    assert_eq!(button_bounds.height, panel_bounds.height);

    // Coercing the returned button again is identity: same instance, no
    // further children anywhere.
    let again = coerce(&platform, &button, headless::BUTTON).unwrap();
    assert_eq!(again, button);
    assert_eq!(panel_node.child_count(), 1);
    assert_eq!(button.as_node().unwrap().child_count(), 0);
}

// =============================================================================
// Bind Option Scenarios
// =============================================================================

#[test]
fn default_bind_pushes_view_state_onto_native() {
    let platform = Headless::new();
    let label = platform.new_node(headless::LABEL).unwrap();
    label.as_node().unwrap().set_text("from storyboard");

    let view = LabelView::new("from view");
    let dyn_view: Rc<dyn View<Headless>> = view.clone();
    bind_to_handle(&platform, &label, headless::LABEL, &dyn_view, BindOptions::empty()).unwrap();

    // The view's declared state is authoritative.
    assert_eq!(label.as_node().unwrap().text(), Some("from view".to_string()));
    assert_eq!(view.text.get(), "from view");
}

#[test]
fn preserving_bind_reads_native_state_into_view() {
    let platform = Headless::new();
    let label = platform.new_node(headless::LABEL).unwrap();
    label.as_node().unwrap().set_text("from storyboard");

    let view = LabelView::new("from view");
    let dyn_view: Rc<dyn View<Headless>> = view.clone();
    bind_to_handle(
        &platform,
        &label,
        headless::LABEL,
        &dyn_view,
        BindOptions::PRESERVE_NATIVE_PROPERTIES,
    )
    .unwrap();

    // Native properties are untouched; the view's shadow state moved.
    assert_eq!(
        label.as_node().unwrap().text(),
        Some("from storyboard".to_string())
    );
    assert_eq!(view.text.get(), "from storyboard");
}

// =============================================================================
// Lifecycle Scenarios
// =============================================================================

#[test]
fn bind_through_controller_releases_exactly_once() {
    let platform = Headless::new();
    let panel = platform.new_node(headless::PANEL).unwrap();
    let controller = platform.new_controller(Some(&panel));

    let view = LabelView::new("hello");
    let dyn_view: Rc<dyn View<Headless>> = view.clone();

    // Panel does not satisfy Label, so a label is synthesized inside it and
    // the view binds to the synthesized child.
    let bound = bind_to_handle(
        &platform,
        &controller,
        headless::LABEL,
        &dyn_view,
        BindOptions::empty(),
    )
    .unwrap();
    assert_eq!(platform.type_of(&bound.native), headless::LABEL);
    assert_eq!(panel.as_node().unwrap().child_count(), 1);
    assert_eq!(
        bound.native.as_node().unwrap().text(),
        Some("hello".to_string())
    );

    assert!(!bound.release.is_released());
    bound.release.release();
    bound.release.release();
    bound.release.release();
    assert_eq!(view.unbinds.get(), 1);
    assert!(view.bound.borrow().is_none());

    // After release the same view may bind again.
    let rebound = bind_to_handle(
        &platform,
        &bound.native,
        headless::LABEL,
        &dyn_view,
        BindOptions::empty(),
    )
    .unwrap();
    assert_eq!(rebound.native, bound.native);
}

#[test]
fn create_and_bind_returns_fresh_native() {
    let platform = Headless::new();
    let view = LabelView::new("fresh");
    let dyn_view: Rc<dyn View<Headless>> = view.clone();

    let bound = create_bound_native(&dyn_view, &platform.env(), BindOptions::empty()).unwrap();
    assert_eq!(platform.type_of(&bound.native), headless::LABEL);
    assert_eq!(
        bound.native.as_node().unwrap().text(),
        Some("fresh".to_string())
    );

    bound.release.release();
    assert_eq!(view.unbinds.get(), 1);
}

#[test]
fn create_bound_display_unwraps_controller_producing_view() {
    let platform = Headless::new();
    let view = ScreenView::new();
    let dyn_view: Rc<dyn View<Headless>> = view.clone();

    let bound =
        create_bound_display(&platform, &dyn_view, &platform.env(), BindOptions::empty()).unwrap();
    assert!(platform.is_display(&bound.native));
    assert_eq!(platform.type_of(&bound.native), headless::PANEL);
}

#[test]
fn create_bound_root_wraps_display_producing_view() {
    let platform = Headless::new();
    let view = LabelView::new("wrapped");
    let dyn_view: Rc<dyn View<Headless>> = view.clone();

    let bound =
        create_bound_root(&platform, &dyn_view, &platform.env(), BindOptions::empty()).unwrap();
    assert!(platform.is_root_wrapper(&bound.native));
    let root = resolve(&platform, &bound.native).unwrap();
    assert_eq!(platform.type_of(&root), headless::LABEL);
}
