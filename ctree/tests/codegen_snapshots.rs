//! Snapshot tests for whole-module code generation.
//!
//! These tests verify that rendered translation units match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use ctree::{
    Block, Declarator, Dtype, For, FunctionBody, Generable, GenerableStruct, If, Module, Node,
    PpConditional,
};

#[test]
fn test_saxpy_module() {
    let mut module = Module::new();
    module.append(Node::include_system("stddef.h"));
    module.append(Node::define("ALPHA", "2.0f"));

    let fdecl = Declarator::value("void", "saxpy").function(vec![
        Declarator::value("size_t", "n"),
        Declarator::value("float", "y").pointer(),
        Declarator::value("float", "x").const_().pointer(),
    ]);
    let mut inner = Block::new();
    inner.append(Node::statement("y[i] += ALPHA * x[i]"));
    let mut body = Block::new();
    body.append(For::new("size_t i = 0", "i < n", "++i", inner));
    module.append(FunctionBody::new(fdecl, body));

    insta::assert_snapshot!("saxpy_module", module.to_code());
}

#[test]
fn test_particle_struct() {
    let s = GenerableStruct::new(
        "particle",
        vec![
            Declarator::pod(Dtype::Float64, "mass"),
            Declarator::pod(Dtype::Int8, "charge"),
        ],
    )
    .unwrap();

    insta::assert_snapshot!("particle_struct", s.to_code());
}

#[test]
fn test_clamp_module() {
    let mut module = Module::new();
    module.append(Node::pragma("once"));
    module.append(PpConditional::ifndef(
        "BLOCK_SIZE",
        vec![Node::define("BLOCK_SIZE", "256")],
    ));

    let fdecl = Declarator::value("int", "clamp").function(vec![
        Declarator::value("int", "x"),
        Declarator::value("int", "lo"),
        Declarator::value("int", "hi"),
    ]);
    let mut body = Block::new();
    body.append(
        If::new("x < lo", Node::statement("return lo"))
            .with_else(If::new("x > hi", Node::statement("return hi"))),
    );
    body.append(Node::statement("return x"));
    module.append(FunctionBody::new(fdecl, body));

    insta::assert_snapshot!("clamp_module", module.to_code());
}
