//! Small tree builders shared by the integration tests.
//!
//! Each helper allocates one statement and returns it together with the
//! identifier node the test needs to wire into the scope graph.

#![allow(dead_code)]

use jsphp_syntax::{NodeArena, NodeData, NodeIndex};

pub fn literal(arena: &mut NodeArena) -> NodeIndex {
    arena.alloc(NodeData::Literal {
        raw: "1".to_string(),
    })
}

/// `name = 1;`
pub fn assign_stmt(arena: &mut NodeArena, name: &str) -> (NodeIndex, NodeIndex) {
    let left = arena.identifier(name);
    let right = literal(arena);
    let assign = arena.alloc(NodeData::AssignmentExpression {
        operator: "=".to_string(),
        left,
        right,
    });
    (
        arena.alloc(NodeData::ExpressionStatement { expression: assign }),
        left,
    )
}

/// `var name;` / `var name = 1;`
pub fn var_stmt(arena: &mut NodeArena, name: &str, with_init: bool) -> (NodeIndex, NodeIndex) {
    let id = arena.identifier(name);
    let init = if with_init {
        literal(arena)
    } else {
        NodeIndex::NONE
    };
    let declarator = arena.alloc(NodeData::VariableDeclarator { id, init });
    (
        arena.alloc(NodeData::VariableDeclaration {
            declarations: vec![declarator],
        }),
        id,
    )
}

/// `name;`
pub fn read_stmt(arena: &mut NodeArena, name: &str) -> (NodeIndex, NodeIndex) {
    let id = arena.identifier(name);
    (
        arena.alloc(NodeData::ExpressionStatement { expression: id }),
        id,
    )
}

/// `return name;`
pub fn return_stmt(arena: &mut NodeArena, name: &str) -> (NodeIndex, NodeIndex) {
    let id = arena.identifier(name);
    (
        arena.alloc(NodeData::ReturnStatement { argument: id }),
        id,
    )
}

/// `function name() { body }` returning (declaration, name identifier).
pub fn function_decl(arena: &mut NodeArena, name: &str, body: Vec<NodeIndex>) -> (NodeIndex, NodeIndex) {
    let id = arena.identifier(name);
    let body = arena.alloc(NodeData::BlockStatement { body });
    (
        arena.alloc(NodeData::FunctionDeclaration {
            id,
            params: Vec::new(),
            body,
        }),
        id,
    )
}

/// `try {} catch (param) { body }` returning (try statement, catch clause, param).
pub fn try_catch(arena: &mut NodeArena, param: &str, body: Vec<NodeIndex>) -> (NodeIndex, NodeIndex, NodeIndex) {
    let block = arena.alloc(NodeData::BlockStatement { body: Vec::new() });
    let param = arena.identifier(param);
    let body = arena.alloc(NodeData::BlockStatement { body });
    let handler = arena.alloc(NodeData::CatchClause { param, body });
    let stmt = arena.alloc(NodeData::TryStatement {
        block,
        handler,
        finalizer: NodeIndex::NONE,
    });
    (stmt, handler, param)
}

pub fn program(arena: &mut NodeArena, body: Vec<NodeIndex>) -> NodeIndex {
    arena.alloc(NodeData::Program { body })
}
