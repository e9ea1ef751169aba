//! Headless platform - Reference adapter with no toolkit behind it.
//!
//! Models exactly what the binding protocol touches: a display-object tree
//! over `Rc<RefCell<...>>`, controllers that own at most one root object, a
//! type lattice with factories for the built-in kinds, and a Taffy layout
//! tree standing in for the platform's geometric constraint system.
//!
//! Nodes carry one representative visual property (`text`) so the
//! `PRESERVE_NATIVE_PROPERTIES` behavior has observable native state, and
//! pin metadata so tests can check that a synthesized child references all
//! four container edges.

use std::cell::RefCell;
use std::rc::Rc;

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, LengthPercentageAuto, NodeId,
    Position as TaffyPosition, Rect, Size, Style, TaffyTree,
};

use crate::platform::Platform;
use crate::registry::{FactoryRegistry, TypeTable};
use crate::types::{BindError, Edges, NativeType};

// =============================================================================
// Built-in Type Lattice
// =============================================================================

/// Base display type; every other display kind is registered under it.
pub const VIEW: NativeType = NativeType::new("View");
/// General-purpose container.
pub const PANEL: NativeType = NativeType::new("Panel");
/// Container that stacks its children.
pub const STACK: NativeType = NativeType::new("Stack");
/// Leaf text object.
pub const LABEL: NativeType = NativeType::new("Label");
/// Leaf control.
pub const BUTTON: NativeType = NativeType::new("Button");
/// Root-owning wrapper kind (not a display object).
pub const CONTROLLER: NativeType = NativeType::new("Controller");
/// Anything the platform cannot see into.
pub const OPAQUE: NativeType = NativeType::new("Opaque");

// =============================================================================
// Construction Context
// =============================================================================

/// Construction context for headless native objects.
///
/// The Android `Context` analogue: the ambient state a fresh object needs,
/// here a shared handle to the layout tree. Cloned freely; all clones refer
/// to the same tree.
#[derive(Clone)]
pub struct Env {
    taffy: Rc<RefCell<TaffyTree<()>>>,
}

impl Env {
    fn new() -> Self {
        Self {
            taffy: Rc::new(RefCell::new(TaffyTree::new())),
        }
    }
}

// =============================================================================
// Display Nodes
// =============================================================================

#[derive(Debug)]
struct NodeData {
    ty: NativeType,
    container: bool,
    children: Vec<Node>,
    text: Option<String>,
    pinned: Edges,
    layout: NodeId,
}

/// A headless display object. Clones are references to the same object.
#[derive(Clone, Debug)]
pub struct Node {
    inner: Rc<RefCell<NodeData>>,
}

impl Node {
    fn new(ty: NativeType, container: bool, env: &Env) -> Self {
        // Containers fill the space offered to them; leaves size to content.
        let style = if container {
            Style {
                size: Size {
                    width: TaffyDimension::Percent(1.0),
                    height: TaffyDimension::Percent(1.0),
                },
                ..Default::default()
            }
        } else {
            Style::default()
        };
        let layout = env.taffy.borrow_mut().new_leaf(style).unwrap();
        Self {
            inner: Rc::new(RefCell::new(NodeData {
                ty,
                container,
                children: Vec::new(),
                text: None,
                pinned: Edges::empty(),
                layout,
            })),
        }
    }

    /// Construct a leaf display object of type `ty`.
    pub fn leaf(ty: NativeType, env: &Env) -> Self {
        Self::new(ty, false, env)
    }

    /// Construct a container display object of type `ty`.
    pub fn container(ty: NativeType, env: &Env) -> Self {
        Self::new(ty, true, env)
    }

    /// The concrete type of this object.
    pub fn ty(&self) -> NativeType {
        self.inner.borrow().ty
    }

    /// Whether this object can hold children.
    pub fn is_container(&self) -> bool {
        self.inner.borrow().container
    }

    /// The node's current text property, if set.
    pub fn text(&self) -> Option<String> {
        self.inner.borrow().text.clone()
    }

    /// Set the node's text property.
    pub fn set_text(&self, text: impl Into<String>) {
        self.inner.borrow_mut().text = Some(text.into());
    }

    /// Which container edges this node is pinned to.
    pub fn pinned_edges(&self) -> Edges {
        self.inner.borrow().pinned
    }

    /// Snapshot of the node's children.
    pub fn children(&self) -> Vec<Node> {
        self.inner.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

// =============================================================================
// Controllers
// =============================================================================

/// A screen/controller-like wrapper owning at most one root display object.
#[derive(Clone, Debug)]
pub struct Controller {
    root: Rc<RefCell<Option<Node>>>,
}

impl Controller {
    /// Construct a controller, optionally owning `root`.
    pub fn new(root: Option<Node>) -> Self {
        Self {
            root: Rc::new(RefCell::new(root)),
        }
    }

    /// The root display object this controller currently owns.
    pub fn root(&self) -> Option<Node> {
        self.root.borrow().clone()
    }

    /// Replace the owned root display object.
    pub fn set_root(&self, node: Option<Node>) {
        *self.root.borrow_mut() = node;
    }
}

impl PartialEq for Controller {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.root, &other.root)
    }
}

impl Eq for Controller {}

// =============================================================================
// Handles
// =============================================================================

/// An opaque reference to a headless platform object.
///
/// `Opaque` stands in for platform objects this adapter cannot see into
/// (services, menus, ...); they resolve to nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum Handle {
    Node(Node),
    Controller(Controller),
    Opaque,
}

impl Handle {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Handle::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_controller(&self) -> Option<&Controller> {
        match self {
            Handle::Controller(controller) => Some(controller),
            _ => None,
        }
    }
}

// =============================================================================
// Computed Geometry
// =============================================================================

/// Resolved geometry of a node after a layout pass, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// =============================================================================
// Headless Platform
// =============================================================================

/// The headless platform adapter.
pub struct Headless {
    env: Env,
    types: TypeTable,
    factories: FactoryRegistry<Headless>,
}

impl Headless {
    pub fn new() -> Self {
        let mut types = TypeTable::new();
        for ty in [PANEL, STACK, LABEL, BUTTON] {
            types.insert_subtype(ty, VIEW);
        }

        let mut factories: FactoryRegistry<Headless> = FactoryRegistry::new();
        for ty in [VIEW, PANEL, STACK] {
            factories.register(ty, move |env: &Env| Handle::Node(Node::container(ty, env)));
        }
        for ty in [LABEL, BUTTON] {
            factories.register(ty, move |env: &Env| Handle::Node(Node::leaf(ty, env)));
        }

        Self {
            env: Env::new(),
            types,
            factories,
        }
    }

    /// The platform's construction context.
    pub fn env(&self) -> Env {
        self.env.clone()
    }

    /// Construct a fresh display object of a registered type.
    pub fn new_node(&self, ty: NativeType) -> Result<Handle, BindError> {
        self.factories.create(ty, &self.env)
    }

    /// Construct a controller, optionally owning `root` (which must be a
    /// display object to be adopted).
    pub fn new_controller(&self, root: Option<&Handle>) -> Handle {
        let root = root.and_then(Handle::as_node).cloned();
        Handle::Controller(Controller::new(root))
    }

    /// Run a layout pass over `root` with a definite available space.
    pub fn compute_layout(&self, root: &Handle, width: f32, height: f32) {
        let Some(root) = root.as_node() else { return };
        let layout = root.inner.borrow().layout;
        let available = Size {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Definite(height),
        };
        let _ = self.env.taffy.borrow_mut().compute_layout(layout, available);
    }

    /// Geometry of a node from the last layout pass.
    pub fn bounds_of(&self, handle: &Handle) -> Option<Bounds> {
        let node = handle.as_node()?;
        let layout = node.inner.borrow().layout;
        let taffy = self.env.taffy.borrow();
        let computed = taffy.layout(layout).ok()?;
        Some(Bounds {
            x: computed.location.x,
            y: computed.location.y,
            width: computed.size.width,
            height: computed.size.height,
        })
    }
}

impl Default for Headless {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for Headless {
    type Handle = Handle;
    type Context = Env;

    fn is_display(&self, handle: &Handle) -> bool {
        matches!(handle, Handle::Node(_))
    }

    fn is_root_wrapper(&self, handle: &Handle) -> bool {
        matches!(handle, Handle::Controller(_))
    }

    fn owned_root(&self, handle: &Handle) -> Option<Handle> {
        handle.as_controller()?.root().map(Handle::Node)
    }

    fn type_of(&self, native: &Handle) -> NativeType {
        match native {
            Handle::Node(node) => node.ty(),
            Handle::Controller(_) => CONTROLLER,
            Handle::Opaque => OPAQUE,
        }
    }

    fn satisfies(&self, concrete: NativeType, required: NativeType) -> bool {
        self.types.satisfies(concrete, required)
    }

    fn is_container(&self, native: &Handle) -> bool {
        native.as_node().is_some_and(Node::is_container)
    }

    fn context_of(&self, _native: &Handle) -> Env {
        // One process-wide environment; every node inherits it.
        self.env.clone()
    }

    fn create(&self, ty: NativeType, cx: &Env) -> Result<Handle, BindError> {
        self.factories.create(ty, cx)
    }

    fn insert_child(&self, parent: &Handle, child: &Handle) {
        let (Some(parent), Some(child)) = (parent.as_node(), child.as_node()) else {
            return;
        };
        parent.inner.borrow_mut().children.push(child.clone());
        let parent_layout = parent.inner.borrow().layout;
        let child_layout = child.inner.borrow().layout;
        let _ = self
            .env
            .taffy
            .borrow_mut()
            .add_child(parent_layout, child_layout);
    }

    fn pin_to_edges(&self, parent: &Handle, child: &Handle) {
        let (Some(_parent), Some(child)) = (parent.as_node(), child.as_node()) else {
            return;
        };
        // Absolute position with zero inset on all four edges stretches the
        // child over the container's box.
        let style = Style {
            position: TaffyPosition::Absolute,
            inset: Rect {
                left: LengthPercentageAuto::Percent(0.0),
                right: LengthPercentageAuto::Percent(0.0),
                top: LengthPercentageAuto::Percent(0.0),
                bottom: LengthPercentageAuto::Percent(0.0),
            },
            ..Default::default()
        };
        let child_layout = child.inner.borrow().layout;
        let _ = self.env.taffy.borrow_mut().set_style(child_layout, style);
        child.inner.borrow_mut().pinned = Edges::all();
    }

    fn wrap_in_root(&self, display: &Handle) -> Result<Handle, BindError> {
        match display.as_node() {
            Some(node) => Ok(Handle::Controller(Controller::new(Some(node.clone())))),
            None => Err(BindError::NotFound),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
