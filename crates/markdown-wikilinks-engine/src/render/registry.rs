use std::collections::HashMap;

use crate::parsing::inline::Prioritized;

use super::{
    tree::{Node, NodeKind},
    writer::HtmlWriter,
};

/// Renders one node. Called with `entering == true` before the node's
/// children and with `false` after them.
pub type RenderFn = fn(w: &mut HtmlWriter, source: &str, node: &Node, entering: bool);

/// A group of render functions registered together at one priority.
pub trait NodeRenderer {
    fn register_funcs(&self, reg: &mut FuncRegisterer<'_>);
}

/// Handed to [`NodeRenderer::register_funcs`]; stamps every function with
/// the group's priority.
pub struct FuncRegisterer<'r> {
    registry: &'r mut RendererRegistry,
    priority: u32,
}

impl FuncRegisterer<'_> {
    pub fn register(&mut self, kind: NodeKind, f: RenderFn) {
        self.registry.register(kind, self.priority, f);
    }
}

/// Renders children only; used for kinds nobody registered.
fn render_children_only(_: &mut HtmlWriter, _: &str, _: &Node, _: bool) {}

/// Dispatch table from node kind to render function.
///
/// For each kind the registration with the lowest priority wins, regardless
/// of the order registrations happen in.
pub struct RendererRegistry {
    funcs: HashMap<NodeKind, Prioritized<RenderFn>>,
    fallback: RenderFn,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self {
            funcs: HashMap::new(),
            fallback: render_children_only,
        }
    }
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: NodeKind, priority: u32, f: RenderFn) {
        match self.funcs.get(&kind) {
            Some(existing) if existing.priority <= priority => {
                log::trace!("keeping {kind:?} renderer at {}", existing.priority);
            }
            _ => {
                self.funcs.insert(kind, Prioritized::new(f, priority));
            }
        }
    }

    /// Registers every function of `renderer` at `priority`.
    pub fn add(&mut self, renderer: &dyn NodeRenderer, priority: u32) {
        renderer.register_funcs(&mut FuncRegisterer {
            registry: self,
            priority,
        });
    }

    /// Priority of the function that will render `kind`, if any.
    pub fn priority_of(&self, kind: NodeKind) -> Option<u32> {
        self.funcs.get(&kind).map(|p| p.priority)
    }

    pub fn set_fallback(&mut self, f: RenderFn) {
        self.fallback = f;
    }

    pub fn render(&self, source: &str, root: &Node) -> String {
        let mut w = HtmlWriter::new();
        self.walk(&mut w, source, root);
        w.finish()
    }

    fn walk(&self, w: &mut HtmlWriter, source: &str, node: &Node) {
        let f = self
            .funcs
            .get(&node.kind())
            .map_or(self.fallback, |p| p.value);
        f(w, source, node, true);
        for child in &node.children {
            self.walk(w, source, child);
        }
        f(w, source, node, false);
    }
}
