//! Scope graph arena.
//!
//! The graph is produced by an external scope resolver: it decides which
//! identifier uses bind to which declarations, and records its decisions
//! through the builder methods here (`add_scope`, `declare`,
//! `add_reference`). This module never resolves names itself.
//!
//! Scopes, references and variables are addressed by index. Parent/child
//! links are index lists, so walking the graph never needs shared ownership.

use jsphp_syntax::NodeIndex;
use serde::{Deserialize, Serialize};

/// Index of a scope in the [`ScopeGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub u32);

impl ScopeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a reference in the [`ScopeGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(pub u32);

impl ReferenceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A variable identified by its owning scope and its position in that
/// scope's variable list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableRef {
    pub scope: ScopeId,
    pub index: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScopeKind {
    Global,
    Function,
    Block,
    Catch,
    /// The extra scope that holds the name of a named function expression.
    /// It wraps exactly one child: the function's own scope.
    FunctionExpressionName,
}

impl ScopeKind {
    /// Global and function scopes receive hoisted `var` and function bindings.
    pub const fn is_hoisting_target(self) -> bool {
        matches!(self, ScopeKind::Global | ScopeKind::Function)
    }
}

/// A binding local to one scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    /// Declaring identifier nodes, first declaration first.
    #[serde(default)]
    pub identifiers: Vec<NodeIndex>,
    /// Every reference the resolver bound to this variable.
    #[serde(default)]
    pub references: Vec<ReferenceId>,
}

/// One identifier use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub identifier: NodeIndex,
    /// Scope in which the use occurs.
    pub from: ScopeId,
    /// The variable the resolver bound this use to, `None` when free.
    #[serde(default)]
    pub resolved: Option<VariableRef>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scope {
    pub kind: ScopeKind,
    /// Syntax node this scope is attached to.
    pub anchor: NodeIndex,
    #[serde(default)]
    pub parent: Option<ScopeId>,
    #[serde(default)]
    pub children: Vec<ScopeId>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    /// References occurring directly in this scope, in source order.
    #[serde(default)]
    pub references: Vec<ReferenceId>,
    #[serde(default)]
    pub this_found: bool,
}

impl Scope {
    fn new(kind: ScopeKind, anchor: NodeIndex, parent: Option<ScopeId>) -> Self {
        Scope {
            kind,
            anchor,
            parent,
            children: Vec::new(),
            variables: Vec::new(),
            references: Vec::new(),
            this_found: false,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScopeGraph {
    scopes: Vec<Scope>,
    #[serde(default)]
    references: Vec<Reference>,
}

impl ScopeGraph {
    pub fn new() -> ScopeGraph {
        ScopeGraph::default()
    }

    /// Create a scope. The first scope created is the root.
    ///
    /// When `parent` is given, the new scope is appended to its children.
    pub fn add_scope(
        &mut self,
        kind: ScopeKind,
        anchor: NodeIndex,
        parent: Option<ScopeId>,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(kind, anchor, parent));
        if let Some(parent_scope) = parent.and_then(|p| self.scopes.get_mut(p.index())) {
            parent_scope.children.push(id);
        }
        id
    }

    /// Declare `name` in `scope`. A second declaration of the same name adds
    /// another declaring identifier to the existing variable.
    pub fn declare(&mut self, scope: ScopeId, name: &str, identifier: NodeIndex) -> VariableRef {
        let Some(target) = self.scopes.get_mut(scope.index()) else {
            return VariableRef { scope, index: u32::MAX };
        };
        let index = match target.variables.iter().position(|var| var.name == name) {
            Some(pos) => pos,
            None => {
                target.variables.push(Variable {
                    name: name.to_string(),
                    identifiers: Vec::new(),
                    references: Vec::new(),
                });
                target.variables.len() - 1
            }
        };
        if identifier.is_some() {
            target.variables[index].identifiers.push(identifier);
        }
        VariableRef {
            scope,
            index: index as u32,
        }
    }

    /// Record a use of `identifier` occurring in `from`, bound to `resolved`
    /// (or free when `None`).
    pub fn add_reference(
        &mut self,
        from: ScopeId,
        identifier: NodeIndex,
        resolved: Option<VariableRef>,
    ) -> ReferenceId {
        let id = ReferenceId(self.references.len() as u32);
        self.references.push(Reference {
            identifier,
            from,
            resolved,
        });
        if let Some(scope) = self.scopes.get_mut(from.index()) {
            scope.references.push(id);
        }
        if let Some(var) = resolved.and_then(|r| self.variable_mut(r)) {
            var.references.push(id);
        }
        id
    }

    /// Record that `this` occurs in `scope`.
    pub fn mark_this(&mut self, scope: ScopeId) {
        if let Some(scope) = self.scopes.get_mut(scope.index()) {
            scope.this_found = true;
        }
    }

    pub fn root(&self) -> Option<ScopeId> {
        if self.scopes.is_empty() {
            None
        } else {
            Some(ScopeId(0))
        }
    }

    #[inline]
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    #[inline]
    pub fn reference(&self, id: ReferenceId) -> Option<&Reference> {
        self.references.get(id.index())
    }

    pub fn variable(&self, var: VariableRef) -> Option<&Variable> {
        self.scope(var.scope)?.variables.get(var.index as usize)
    }

    fn variable_mut(&mut self, var: VariableRef) -> Option<&mut Variable> {
        self.scopes
            .get_mut(var.scope.index())?
            .variables
            .get_mut(var.index as usize)
    }

    /// All scopes with their ids, in creation order.
    pub fn scopes(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .map(|(i, scope)| (ScopeId(i as u32), scope))
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Scope owning the variable `reference` resolved to.
    pub fn resolved_scope(&self, reference: &Reference) -> Option<ScopeId> {
        reference.resolved.map(|var| var.scope)
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod graph_tests;
