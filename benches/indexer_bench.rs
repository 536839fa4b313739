//! Scope annotation benchmarks.
//!
//! Builds synthetic programs directly in the arena and scope graph, so the
//! numbers cover only the passes themselves.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsphp::Transformer;
use jsphp::scope::{ScopeGraph, ScopeKind};
use jsphp::syntax::{NodeArena, NodeData, NodeIndex};

/// Nodes of one nesting level the scope graph needs to point at.
struct Level {
    func: NodeIndex,
    name: NodeIndex,
    clause: NodeIndex,
    param: NodeIndex,
    decl_id: NodeIndex,
    target: NodeIndex,
    outer_read: NodeIndex,
    global_read: NodeIndex,
}

/// ```text
/// function f() {
///     var v; v = 1; v; console;
///     try {} catch (e) {}
///     function f() { ... }   // `remaining - 1` more levels
/// }
/// ```
/// Returns levels outermost first.
fn alloc_levels(arena: &mut NodeArena, remaining: usize) -> Vec<Level> {
    if remaining == 0 {
        return Vec::new();
    }
    let mut inner = alloc_levels(arena, remaining - 1);

    let decl_id = arena.identifier("v");
    let declarator = arena.alloc(NodeData::VariableDeclarator {
        id: decl_id,
        init: NodeIndex::NONE,
    });
    let decl = arena.alloc(NodeData::VariableDeclaration {
        declarations: vec![declarator],
    });
    let target = arena.identifier("v");
    let one = arena.alloc(NodeData::Literal {
        raw: "1".to_string(),
    });
    let assign = arena.alloc(NodeData::AssignmentExpression {
        operator: "=".to_string(),
        left: target,
        right: one,
    });
    let outer_read = arena.identifier("v");
    let global_read = arena.identifier("console");
    let try_block = arena.alloc(NodeData::BlockStatement { body: Vec::new() });
    let param = arena.identifier("e");
    let catch_body = arena.alloc(NodeData::BlockStatement { body: Vec::new() });
    let clause = arena.alloc(NodeData::CatchClause {
        param,
        body: catch_body,
    });
    let try_stmt = arena.alloc(NodeData::TryStatement {
        block: try_block,
        handler: clause,
        finalizer: NodeIndex::NONE,
    });

    let mut statements = vec![decl, assign, outer_read, global_read, try_stmt];
    statements.extend(inner.first().map(|level| level.func));
    let body = arena.alloc(NodeData::BlockStatement { body: statements });
    let name = arena.identifier("f");
    let func = arena.alloc(NodeData::FunctionDeclaration {
        id: name,
        params: Vec::new(),
        body,
    });

    inner.insert(
        0,
        Level {
            func,
            name,
            clause,
            param,
            decl_id,
            target,
            outer_read,
            global_read,
        },
    );
    inner
}

/// `width` top-level functions, each nesting `depth` levels.
fn build_program(width: usize, depth: usize) -> (NodeArena, ScopeGraph) {
    let mut arena = NodeArena::with_capacity(width * depth * 20);
    let chains: Vec<Vec<Level>> = (0..width).map(|_| alloc_levels(&mut arena, depth)).collect();
    let top_level = chains
        .iter()
        .filter_map(|chain| chain.first().map(|level| level.func))
        .collect();
    let program = arena.alloc(NodeData::Program { body: top_level });

    let mut graph = ScopeGraph::new();
    let global = graph.add_scope(ScopeKind::Global, program, None);
    for chain in &chains {
        let mut parent = global;
        let mut outer = None;
        for level in chain {
            graph.declare(parent, "f", level.name);
            let scope = graph.add_scope(ScopeKind::Function, level.func, Some(parent));
            let v = graph.declare(scope, "v", level.decl_id);
            graph.add_reference(scope, level.target, Some(v));
            graph.add_reference(scope, level.outer_read, outer);
            graph.add_reference(scope, level.global_read, None);
            let catch = graph.add_scope(ScopeKind::Catch, level.clause, Some(scope));
            graph.declare(catch, "e", level.param);
            outer = Some(v);
            parent = scope;
        }
    }
    (arena, graph)
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");
    for &(width, depth) in &[(10, 5), (100, 5), (100, 20)] {
        let program = build_program(width, depth);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{depth}")),
            &program,
            |b, (arena, graph)| {
                b.iter(|| {
                    let mut transformer = Transformer::new();
                    transformer.process(black_box(arena), black_box(graph));
                    black_box(transformer.into_annotations())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_annotate);
criterion_main!(benches);
