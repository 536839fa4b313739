//! Full pipeline over serialized programs.

use jsphp::scope::{Annotations, ScopeGraph};
use jsphp::syntax::{NodeArena, NodeIndex};
use jsphp::{ProgramInput, ScopeResolver, Transformer};
use std::borrow::Cow;
use std::cell::Cell;

// function f() { x = 1; var x; }  try {} catch (e) { e; }
const PROGRAM: &str = r#"{
  "tree": {
    "nodes": [
      { "type": "Identifier", "name": "x" },
      { "type": "Literal", "raw": "1" },
      { "type": "AssignmentExpression", "operator": "=", "left": 0, "right": 1 },
      { "type": "ExpressionStatement", "expression": 2 },
      { "type": "Identifier", "name": "x" },
      { "type": "VariableDeclarator", "id": 4 },
      { "type": "VariableDeclaration", "declarations": [5] },
      { "type": "BlockStatement", "body": [3, 6] },
      { "type": "Identifier", "name": "f" },
      { "type": "FunctionDeclaration", "id": 8, "body": 7 },
      { "type": "BlockStatement", "body": [] },
      { "type": "Identifier", "name": "e" },
      { "type": "Identifier", "name": "e" },
      { "type": "ExpressionStatement", "expression": 12 },
      { "type": "BlockStatement", "body": [13] },
      { "type": "CatchClause", "param": 11, "body": 14 },
      { "type": "TryStatement", "block": 10, "handler": 15 },
      { "type": "Program", "body": [9, 16] }
    ]
  },
  "scopes": {
    "scopes": [
      { "kind": "global", "anchor": 17, "children": [1, 2],
        "variables": [{ "name": "f", "identifiers": [8] }] },
      { "kind": "function", "anchor": 9, "parent": 0, "references": [0],
        "variables": [{ "name": "x", "identifiers": [4], "references": [0] }] },
      { "kind": "catch", "anchor": 15, "parent": 0, "references": [1],
        "variables": [{ "name": "e", "identifiers": [11], "references": [1] }] }
    ],
    "references": [
      { "identifier": 0, "from": 1, "resolved": { "scope": 1, "index": 0 } },
      { "identifier": 12, "from": 2, "resolved": { "scope": 2, "index": 0 } }
    ]
  }
}"#;

fn load() -> ProgramInput {
    serde_json::from_str(PROGRAM).unwrap()
}

#[test]
fn test_program_input_annotates_everything() {
    let mut input = load();
    let annotations = input.annotate();

    let f_node = NodeIndex(9);
    let root = NodeIndex(17);
    assert!(annotations.is_implicit(f_node, "x"));
    assert!(annotations.hoist_record(f_node).unwrap().vars.contains("x"));
    assert_eq!(
        annotations.hoist_record(root).unwrap().funcs.get("f"),
        Some(&f_node)
    );
    assert_eq!(annotations.rename_suffix(NodeIndex(11)), Some("_1_"));
    assert_eq!(
        annotations.printed_name(&input.tree, NodeIndex(12)).as_deref(),
        Some("e_1_")
    );
    assert!(annotations.scope_index(root).unwrap().unresolved.is_empty());
}

#[test]
fn test_rerunning_pipeline_is_stable() {
    let mut input = load();
    let first = input.annotate().to_report();
    let second = input.annotate().to_report();
    assert_eq!(first, second);

    let mut transformer = Transformer::new();
    transformer.process(&input.tree, &input.scopes);
    transformer.process(&input.tree, &input.scopes);
    assert_eq!(transformer.annotations().to_report(), first);
}

/// Resolver stub that checks hoisting ran before it was asked for a graph.
struct CheckingResolver {
    graph: ScopeGraph,
    saw_hoisting: Cell<bool>,
}

impl ScopeResolver for CheckingResolver {
    fn resolve<'a>(&'a self, _arena: &NodeArena, hoisting: &Annotations) -> Cow<'a, ScopeGraph> {
        self.saw_hoisting
            .set(hoisting.hoist_record(NodeIndex(9)).is_some());
        Cow::Borrowed(&self.graph)
    }
}

#[test]
fn test_resolver_sees_hoisting_records() {
    let mut input = load();
    input.tree.link_parents();
    let resolver = CheckingResolver {
        graph: input.scopes.clone(),
        saw_hoisting: Cell::new(false),
    };

    let mut transformer = Transformer::new();
    let annotations = transformer.process(&input.tree, &resolver);
    assert!(annotations.is_implicit(NodeIndex(9), "x"));
    assert!(resolver.saw_hoisting.get());
}

#[test]
fn test_report_json_shape() {
    let mut input = load();
    let report = serde_json::to_value(input.annotate().to_report()).unwrap();

    assert_eq!(report["implicitVars"][0]["node"], 9);
    assert_eq!(report["implicitVars"][0]["names"], serde_json::json!(["x"]));
    assert_eq!(report["renameSuffixes"].as_array().unwrap().len(), 2);
    assert_eq!(report["hoisting"][0]["node"], 9);
    assert_eq!(report["hoisting"][1]["funcs"]["f"], 9);
}

#[test]
fn test_empty_program() {
    let mut input = ProgramInput::default();
    let annotations = input.annotate();
    assert!(annotations.to_report().scope_indexes.is_empty());
}
