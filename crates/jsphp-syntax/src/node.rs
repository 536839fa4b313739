//! Node types for the syntax tree arena.
//!
//! Only the node kinds that matter to scoping get a dedicated variant. Every
//! other construct (calls, member access, loops, ...) is carried as
//! [`NodeData::Other`] so the tree stays complete for the generator while the
//! scope passes can skip straight past it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index of a node inside a [`NodeArena`](crate::NodeArena).
///
/// Serialized as a plain integer, with [`NodeIndex::NONE`] written as `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

impl From<Option<u32>> for NodeIndex {
    fn from(value: Option<u32>) -> Self {
        value.map_or(NodeIndex::NONE, NodeIndex)
    }
}

impl From<NodeIndex> for Option<u32> {
    fn from(value: NodeIndex) -> Self {
        if value.is_none() { None } else { Some(value.0) }
    }
}

/// Kind-specific payload of a node.
///
/// Field names follow ESTree so serialized trees read like the output of a
/// JavaScript parser. Optional children use [`NodeIndex::NONE`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeData {
    Program {
        body: Vec<NodeIndex>,
    },
    BlockStatement {
        body: Vec<NodeIndex>,
    },
    ExpressionStatement {
        expression: NodeIndex,
    },
    ReturnStatement {
        #[serde(default)]
        argument: NodeIndex,
    },
    VariableDeclaration {
        declarations: Vec<NodeIndex>,
    },
    VariableDeclarator {
        id: NodeIndex,
        #[serde(default)]
        init: NodeIndex,
    },
    FunctionDeclaration {
        id: NodeIndex,
        #[serde(default)]
        params: Vec<NodeIndex>,
        body: NodeIndex,
    },
    FunctionExpression {
        #[serde(default)]
        id: NodeIndex,
        #[serde(default)]
        params: Vec<NodeIndex>,
        body: NodeIndex,
    },
    Identifier {
        name: String,
    },
    AssignmentExpression {
        operator: String,
        left: NodeIndex,
        right: NodeIndex,
    },
    TryStatement {
        block: NodeIndex,
        #[serde(default)]
        handler: NodeIndex,
        #[serde(default)]
        finalizer: NodeIndex,
    },
    CatchClause {
        param: NodeIndex,
        body: NodeIndex,
    },
    ThisExpression,
    Literal {
        raw: String,
    },
    /// Any construct the scope passes do not inspect.
    Other {
        kind: String,
        #[serde(default)]
        children: Vec<NodeIndex>,
    },
}

impl NodeData {
    /// Short kind name, matching the serialized `type` tag.
    pub fn kind_name(&self) -> &str {
        match self {
            NodeData::Program { .. } => "Program",
            NodeData::BlockStatement { .. } => "BlockStatement",
            NodeData::ExpressionStatement { .. } => "ExpressionStatement",
            NodeData::ReturnStatement { .. } => "ReturnStatement",
            NodeData::VariableDeclaration { .. } => "VariableDeclaration",
            NodeData::VariableDeclarator { .. } => "VariableDeclarator",
            NodeData::FunctionDeclaration { .. } => "FunctionDeclaration",
            NodeData::FunctionExpression { .. } => "FunctionExpression",
            NodeData::Identifier { .. } => "Identifier",
            NodeData::AssignmentExpression { .. } => "AssignmentExpression",
            NodeData::TryStatement { .. } => "TryStatement",
            NodeData::CatchClause { .. } => "CatchClause",
            NodeData::ThisExpression => "ThisExpression",
            NodeData::Literal { .. } => "Literal",
            NodeData::Other { kind, .. } => kind,
        }
    }

    /// Direct children in document order. Absent optional children are skipped.
    pub fn children(&self) -> SmallVec<[NodeIndex; 4]> {
        let mut out: SmallVec<[NodeIndex; 4]> = SmallVec::new();
        let mut push = |idx: NodeIndex| {
            if idx.is_some() {
                out.push(idx);
            }
        };
        match self {
            NodeData::Program { body } | NodeData::BlockStatement { body } => {
                body.iter().copied().for_each(&mut push);
            }
            NodeData::ExpressionStatement { expression } => push(*expression),
            NodeData::ReturnStatement { argument } => push(*argument),
            NodeData::VariableDeclaration { declarations } => {
                declarations.iter().copied().for_each(&mut push);
            }
            NodeData::VariableDeclarator { id, init } => {
                push(*id);
                push(*init);
            }
            NodeData::FunctionDeclaration { id, params, body }
            | NodeData::FunctionExpression { id, params, body } => {
                push(*id);
                params.iter().copied().for_each(&mut push);
                push(*body);
            }
            NodeData::AssignmentExpression { left, right, .. } => {
                push(*left);
                push(*right);
            }
            NodeData::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                push(*block);
                push(*handler);
                push(*finalizer);
            }
            NodeData::CatchClause { param, body } => {
                push(*param);
                push(*body);
            }
            NodeData::Other { children, .. } => children.iter().copied().for_each(&mut push),
            NodeData::Identifier { .. } | NodeData::ThisExpression | NodeData::Literal { .. } => {}
        }
        out
    }

    /// `true` for nodes that own a `var`/function hoisting target:
    /// the program root and both function forms.
    pub const fn is_hoisting_target(&self) -> bool {
        matches!(
            self,
            NodeData::Program { .. }
                | NodeData::FunctionDeclaration { .. }
                | NodeData::FunctionExpression { .. }
        )
    }
}

/// A node in the arena: its payload plus a back-reference to its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub data: NodeData,
    #[serde(default, skip_serializing_if = "NodeIndex::is_none_ref")]
    pub parent: NodeIndex,
}

impl NodeIndex {
    fn is_none_ref(idx: &NodeIndex) -> bool {
        idx.is_none()
    }
}

impl Node {
    pub fn new(data: NodeData) -> Self {
        Node {
            data,
            parent: NodeIndex::NONE,
        }
    }

    pub fn identifier_name(&self) -> Option<&str> {
        match &self.data {
            NodeData::Identifier { name } => Some(name),
            _ => None,
        }
    }
}
