//! Frame layout: a pre-pass assigning every local a slot number before
//! any instruction is emitted, mirroring `faxc-lir`'s `StackFrame`
//! pre-pass but over PixIR's flat, register-free `(slot, level)` model
//! (§4.4: "one `oframe` per function, sized by how many locals and
//! parameters it declares").

use std::collections::HashMap;

use pixar_sem::{TypedBlock, TypedParam, TypedStmt};
use pixar_util::DefId;

pub struct FrameLayout {
    slots: HashMap<DefId, u32>,
    next_slot: u32,
}

impl FrameLayout {
    fn empty() -> Self {
        Self { slots: HashMap::new(), next_slot: 0 }
    }

    fn assign(&mut self, def_id: DefId) {
        let slot = self.next_slot;
        self.slots.insert(def_id, slot);
        self.next_slot += 1;
    }

    pub fn slot_of(&self, def_id: DefId) -> Option<u32> {
        self.slots.get(&def_id).copied()
    }

    pub fn size(&self) -> u32 {
        self.next_slot
    }

    pub fn for_function(params: &[TypedParam], body: &TypedBlock) -> Self {
        let mut frame = Self::empty();
        for param in params {
            frame.assign(param.def_id);
        }
        frame.walk_block(body);
        frame
    }

    pub fn for_top_level(statements: &[TypedStmt]) -> Self {
        let mut frame = Self::empty();
        for stmt in statements {
            frame.walk_stmt(stmt);
        }
        frame
    }

    fn walk_block(&mut self, block: &TypedBlock) {
        for stmt in &block.statements {
            self.walk_stmt(stmt);
        }
    }

    /// Reserves a slot for every `Let` reachable without crossing into a
    /// nested function body, since each function gets its own frame.
    fn walk_stmt(&mut self, stmt: &TypedStmt) {
        match stmt {
            TypedStmt::Let { def_id, .. } => self.assign(*def_id),
            TypedStmt::Assign { .. } | TypedStmt::Return { .. } | TypedStmt::Expr(_) => {}
            TypedStmt::If { then_block, else_block, .. } => {
                self.walk_block(then_block);
                if let Some(else_block) = else_block {
                    self.walk_block(else_block);
                }
            }
            TypedStmt::While { body, .. } => self.walk_block(body),
            TypedStmt::For { init, update, body, .. } => {
                self.walk_stmt(init);
                self.walk_stmt(update);
                self.walk_block(body);
            }
            TypedStmt::Block(block) => self.walk_block(block),
            TypedStmt::FunctionDef { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixar_lex::Lexer;
    use pixar_par::Parser;
    use pixar_util::FileId;

    fn typed(source: &str) -> Vec<TypedStmt> {
        let tokens = Lexer::new(source, FileId::DUMMY).tokenize().unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        pixar_sem::analyze(&program).unwrap()
    }

    #[test]
    fn top_level_lets_each_get_their_own_slot() {
        let program = typed("let a: int = 1; let b: int = 2;");
        let frame = FrameLayout::for_top_level(&program);
        assert_eq!(frame.size(), 2);
    }

    #[test]
    fn nested_blocks_share_the_enclosing_frame() {
        let program = typed("let a: int = 1; if (true) { let b: int = 2; }");
        let frame = FrameLayout::for_top_level(&program);
        assert_eq!(frame.size(), 2);
    }

    #[test]
    fn nested_function_bodies_get_their_own_frame() {
        let program = typed("fun f(x: int) -> int { let y: int = x; return y; } let a: int = 1;");
        let frame = FrameLayout::for_top_level(&program);
        // only the top-level `a` — `f`'s parameter and local are not ours.
        assert_eq!(frame.size(), 1);

        let TypedStmt::FunctionDef { params, body, .. } = &program[0] else {
            panic!("expected a function def");
        };
        let fn_frame = FrameLayout::for_function(params, body);
        assert_eq!(fn_frame.size(), 2);
    }

    #[test]
    fn for_loop_variable_and_body_locals_share_the_frame() {
        let program = typed("for (let i: int = 0; i < 3; i = i + 1;) { let x: int = i; }");
        let frame = FrameLayout::for_top_level(&program);
        assert_eq!(frame.size(), 2);
    }
}
