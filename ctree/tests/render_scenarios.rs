//! End-to-end rendering scenarios for node trees and declarator chains.

use ctree::{
    Block, Declarator, Dtype, FieldValue, FunctionBody, Generable, GenerableStruct, If, Module,
    Node,
};

#[test]
fn rendering_twice_yields_identical_lines() {
    let fdecl = Declarator::value("int", "main").function(vec![]);
    let mut body = Block::new();
    body.append(Node::statement("return 0"));
    let func = FunctionBody::new(fdecl, body);

    assert_eq!(func.generate(), func.generate());
    assert_eq!(func.to_code(), func.to_code());
}

#[test]
fn empty_block_renders_only_delimiters() {
    assert_eq!(Block::new().generate(), vec!["{", "}"]);
}

#[test]
fn pointer_around_array_parenthesizes_the_name() {
    let decl = Declarator::value("float", "m").array_of(8).pointer();
    assert_eq!(decl.inline(), "float (*m)[8]");
}

#[test]
fn array_around_pointer_does_not_parenthesize() {
    let decl = Declarator::value("float", "m").pointer().array_of(8);
    assert_eq!(decl.inline(), "float *m[8]");
}

#[test]
fn zero_argument_function_renders_tight_parens() {
    let decl = Declarator::value("void", "tick").function(vec![]);
    assert_eq!(decl.inline(), "void tick()");
    assert!(!decl.inline().contains("( )"));
}

#[test]
fn function_arguments_render_in_supplied_order() {
    let decl = Declarator::value("int", "add").function(vec![
        Declarator::value("int", "a"),
        Declarator::value("int", "b"),
    ]);
    assert_eq!(decl.inline(), "int add(int a, int b)");
}

#[test]
fn const_value_behind_pointer() {
    let decl = Declarator::value("char", "greet").const_().pointer();
    assert_eq!(decl.inline(), "char const *greet");
}

#[test]
fn single_statement_if_renders_two_lines() {
    let if_ = If::new("cond", Node::statement("act()"));
    assert_eq!(if_.generate(), vec!["if (cond)", "  act();"]);
}

#[test]
fn block_with_one_child_keeps_braces() {
    // A caller-built block is always brace-wrapped, even with one child.
    let mut body = Block::new();
    body.append(Node::statement("act()"));
    let if_ = If::new("cond", body);
    assert_eq!(if_.generate(), vec!["if (cond)", "{", "  act();", "}"]);
}

#[test]
fn empty_module_renders_empty_output() {
    assert_eq!(Module::new().to_code(), "");
}

#[test]
fn struct_descriptor_has_one_format_per_field() {
    let s = GenerableStruct::new(
        "cell",
        vec![
            Declarator::pod(Dtype::Int32, "row"),
            Declarator::pod(Dtype::Int32, "col"),
            Declarator::pod(Dtype::Float64, "value"),
        ],
    )
    .unwrap();
    assert_eq!(s.struct_format(), "iid");
    assert_eq!(s.byte_size(), 16);
}

#[test]
fn default_values_round_trip_through_packing() {
    let s = GenerableStruct::new(
        "sample",
        vec![
            Declarator::pod(Dtype::Int8, "tag"),
            Declarator::pod(Dtype::Float32, "scale"),
            Declarator::pod(Dtype::Uint64, "stamp"),
        ],
    )
    .unwrap();

    let defaults = s.default_values().unwrap();
    let buffer = s.make_with_defaults().unwrap();
    assert_eq!(buffer.len(), s.byte_size());
    assert_eq!(s.unpack(&buffer).unwrap(), defaults);
}

#[test]
fn explicit_values_round_trip_through_packing() {
    let s = GenerableStruct::new(
        "sample",
        vec![
            Declarator::pod(Dtype::Int32, "count"),
            Declarator::pod(Dtype::Float64, "mean"),
        ],
    )
    .unwrap();

    let values = vec![FieldValue::Int(7), FieldValue::Float(2.5)];
    let buffer = s.make(&values).unwrap();
    assert_eq!(s.unpack(&buffer).unwrap(), values);
}

#[test]
fn field_order_matches_emitted_text() {
    let fields = vec![
        Declarator::pod(Dtype::Int32, "first"),
        Declarator::pod(Dtype::Float32, "second"),
    ];
    let s = GenerableStruct::new("ordered", fields).unwrap();

    let text = s.to_code();
    let first = text.find("first").unwrap();
    let second = text.find("second").unwrap();
    assert!(first < second);
    assert_eq!(s.struct_format(), "if");
}
