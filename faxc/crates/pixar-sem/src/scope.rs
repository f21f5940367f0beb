//! Scope stack for name resolution: a tree of "ribs", one per lexical
//! scope, with innermost-first lookup up the parent chain.

use std::collections::HashMap;

use pixar_util::{define_idx, index_vec::IndexVec, DefId, Symbol};

define_idx!(RibId);

/// A single lexical scope.
#[derive(Debug)]
pub struct Rib {
    bindings: HashMap<Symbol, DefId>,
    parent: Option<RibId>,
    kind: RibKind,
}

/// What kind of construct opened this scope, for diagnostics and for
/// `for`'s loop-variable scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibKind {
    Module,
    Function,
    Block,
    Loop,
}

/// The scope stack, implemented as a forest of ribs addressed by
/// [`RibId`] rather than a literal `Vec` of maps — entering a scope
/// pushes a new rib pointing at its parent; exiting just moves the
/// cursor back, so no rib is ever discarded mid-analysis.
pub struct ScopeTree {
    ribs: IndexVec<RibId, Rib>,
    current: RibId,
}

impl ScopeTree {
    pub fn new() -> Self {
        let mut ribs = IndexVec::new();
        let root = ribs.push(Rib { bindings: HashMap::new(), parent: None, kind: RibKind::Module });
        Self { ribs, current: root }
    }

    pub fn enter(&mut self, kind: RibKind) {
        let rib = self.ribs.push(Rib { bindings: HashMap::new(), parent: Some(self.current), kind });
        self.current = rib;
    }

    pub fn exit(&mut self) {
        if let Some(parent) = self.ribs[self.current].parent {
            self.current = parent;
        }
    }

    pub fn current_kind(&self) -> RibKind {
        self.ribs[self.current].kind
    }

    /// Whether `current` (or an ancestor, up to and including the
    /// nearest `Function` rib) is inside a function body — used to
    /// reject `return` at module scope.
    pub fn in_function(&self) -> bool {
        let mut rib_id = self.current;
        loop {
            match self.ribs[rib_id].kind {
                RibKind::Function => return true,
                RibKind::Module => return false,
                _ => {}
            }
            match self.ribs[rib_id].parent {
                Some(parent) => rib_id = parent,
                None => return false,
            }
        }
    }

    /// Binds `name` in the innermost scope. Returns `false` if `name`
    /// is already bound there (the caller reports `Redeclaration`).
    pub fn declare(&mut self, name: Symbol, def_id: DefId) -> bool {
        let rib = &mut self.ribs[self.current];
        if rib.bindings.contains_key(&name) {
            false
        } else {
            rib.bindings.insert(name, def_id);
            true
        }
    }

    /// Resolves `name` innermost-first up the parent chain.
    pub fn resolve(&self, name: Symbol) -> Option<DefId> {
        let mut rib_id = self.current;
        loop {
            let rib = &self.ribs[rib_id];
            if let Some(&def_id) = rib.bindings.get(&name) {
                return Some(def_id);
            }
            match rib.parent {
                Some(parent) => rib_id = parent,
                None => return None,
            }
        }
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}
