//! Property-based tests for the canonical printer.
//!
//! Strategies generate source text rather than trees, and every generated
//! string is valid by construction: a parse failure is a generator or
//! parser bug, not noise to skip. The property checked throughout is the
//! fixed point: parse, print, re-parse, print again, and the two printed
//! forms must be byte-identical.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use dsx_fmt::format_root;
use dsx_ir::{AssignOp, BinaryOp, Plugin, StringInterner, UnaryOp};
use proptest::prelude::*;

// -- Source Generation Strategies --

/// Words the lexer reserves; they can never be identifiers or parameters.
fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "true" | "false" | "null" | "undefined" | "typeof" | "void" | "delete" | "in"
            | "instanceof"
    )
}

fn ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn signal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\$[a-z][a-z0-9_]{0,8}").expect("valid regex")
}

fn number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..=100_000u32).prop_map(|n| n.to_string()),
        (0.0f64..1000.0).prop_map(|f| format!("{f:.3}")),
        (1u32..10u32, 0u32..6u32).prop_map(|(mantissa, exp)| format!("{mantissa}e{exp}")),
    ]
}

fn string_literal_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 _.:/-]{0,12}")
        .expect("valid regex")
        .prop_map(|s| format!("'{s}'"))
}

fn literal_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        number_strategy(),
        string_literal_strategy(),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        Just("undefined".to_string()),
    ]
}

fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![literal_strategy(), ident_strategy(), signal_strategy()]
}

/// One access-chain segment: member, optional member, index, optional
/// index, or a call with up to two arguments.
fn chain_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ident_strategy().prop_map(|name| format!(".{name}")),
        ident_strategy().prop_map(|name| format!("?.{name}")),
        atom_strategy().prop_map(|index| format!("[{index}]")),
        atom_strategy().prop_map(|index| format!("?.[{index}]")),
        prop::collection::vec(atom_strategy(), 0..3)
            .prop_map(|args| format!("({})", args.join(", "))),
    ]
}

fn chain_strategy() -> impl Strategy<Value = String> {
    (
        atom_strategy(),
        prop::collection::vec(chain_segment_strategy(), 0..3),
    )
        .prop_map(|(base, segments)| format!("{base}{}", segments.concat()))
}

fn unary_op_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(UnaryOp::ALL.map(UnaryOp::symbol).to_vec())
}

fn unary_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        (unary_op_strategy(), chain_strategy())
            .prop_map(|(op, operand)| format!("{op} {operand}")),
        (unary_op_strategy(), unary_op_strategy(), chain_strategy())
            .prop_map(|(outer, inner, operand)| format!("{outer} {inner} {operand}")),
    ]
    .boxed()
}

/// An operand position inside a binary expression: arrows and bare
/// ternaries are not valid there, so this stays at chain level or wraps
/// deeper expressions in parentheses.
fn binary_operand_strategy(depth: u32) -> BoxedStrategy<String> {
    if depth == 0 {
        prop_oneof![chain_strategy(), unary_strategy()].boxed()
    } else {
        prop_oneof![
            chain_strategy(),
            unary_strategy(),
            binary_strategy(depth - 1),
            expr_strategy(depth - 1).prop_map(|inner| format!("({inner})")),
        ]
        .boxed()
    }
}

fn binary_strategy(depth: u32) -> BoxedStrategy<String> {
    let ops = prop::sample::select(BinaryOp::ALL.map(BinaryOp::symbol).to_vec());
    (
        binary_operand_strategy(depth),
        ops,
        binary_operand_strategy(depth),
    )
        .prop_map(|(lhs, op, rhs)| format!("{lhs} {op} {rhs}"))
        .boxed()
}

fn ternary_strategy(depth: u32) -> BoxedStrategy<String> {
    (
        binary_strategy(depth),
        expr_strategy(depth),
        expr_strategy(depth),
    )
        .prop_map(|(test, consequent, alternate)| format!("{test} ? {consequent} : {alternate}"))
        .boxed()
}

fn element_strategy(depth: u32) -> BoxedStrategy<String> {
    prop_oneof![
        4 => expr_strategy(depth),
        1 => expr_strategy(depth).prop_map(|e| format!("...{e}")),
    ]
    .boxed()
}

fn array_strategy(depth: u32) -> BoxedStrategy<String> {
    prop::collection::vec(element_strategy(depth), 0..4)
        .prop_map(|items| format!("[{}]", items.join(", ")))
        .boxed()
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ident_strategy(),
        string_literal_strategy(),
        prop_oneof![ident_strategy(), signal_strategy()].prop_map(|k| format!("[{k}]")),
    ]
}

fn property_strategy(depth: u32) -> BoxedStrategy<String> {
    prop_oneof![
        3 => (key_strategy(), expr_strategy(depth))
            .prop_map(|(key, value)| format!("{key}: {value}")),
        1 => signal_strategy().prop_map(|spread| format!("...{spread}")),
    ]
    .boxed()
}

fn object_strategy(depth: u32) -> BoxedStrategy<String> {
    prop::collection::vec(property_strategy(depth), 0..4)
        .prop_map(|props| {
            if props.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {} }}", props.join(", "))
            }
        })
        .boxed()
}

fn action_strategy(depth: u32) -> BoxedStrategy<String> {
    (
        ident_strategy(),
        prop::collection::vec(element_strategy(depth), 0..3),
    )
        .prop_map(|(name, args)| format!("@{name}({})", args.join(", ")))
        .boxed()
}

fn arrow_strategy(depth: u32) -> BoxedStrategy<String> {
    let params = prop_oneof![
        ident_strategy(),
        Just("()".to_string()),
        prop::collection::vec(ident_strategy(), 2..4)
            .prop_map(|ps| format!("({})", ps.join(", "))),
    ];
    (params, expr_strategy(depth))
        .prop_map(|(params, body)| format!("{params} => {body}"))
        .boxed()
}

/// A full expression, anything legal where the grammar says "expression".
fn expr_strategy(depth: u32) -> BoxedStrategy<String> {
    if depth == 0 {
        return chain_strategy().boxed();
    }
    prop_oneof![
        chain_strategy(),
        unary_strategy(),
        binary_strategy(depth - 1),
        ternary_strategy(depth - 1),
        array_strategy(depth - 1),
        object_strategy(depth - 1),
        action_strategy(depth - 1),
        arrow_strategy(depth - 1),
        expr_strategy(depth - 1).prop_map(|inner| format!("({inner})")),
    ]
    .boxed()
}

/// A valid assignment target: a signal reference or a member/index chain.
/// Bare identifiers and other expressions are rejected by the parser.
fn target_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        signal_strategy(),
        (signal_strategy(), ident_strategy()).prop_map(|(sig, name)| format!("{sig}.{name}")),
        (signal_strategy(), 0u8..10).prop_map(|(sig, i)| format!("{sig}[{i}]")),
        (ident_strategy(), ident_strategy()).prop_map(|(obj, name)| format!("{obj}.{name}")),
        (ident_strategy(), 0u8..10).prop_map(|(obj, i)| format!("{obj}[{i}]")),
    ]
}

fn assignment_strategy(depth: u32) -> BoxedStrategy<String> {
    let ops = prop::sample::select(AssignOp::ALL.map(AssignOp::symbol).to_vec());
    (target_strategy(), ops, expr_strategy(depth))
        .prop_map(|(target, op, value)| format!("{target} {op} {value}"))
        .boxed()
}

fn statement_strategy(depth: u32) -> BoxedStrategy<String> {
    prop_oneof![expr_strategy(depth), assignment_strategy(depth)].boxed()
}

fn sequence_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(statement_strategy(1), 1..4),
        prop::sample::select(vec![", ", "; "]),
    )
        .prop_map(|(stmts, sep)| stmts.join(sep))
}

fn attribute_strategy() -> impl Strategy<Value = String> {
    let plugin = prop::sample::select(Plugin::ALL.map(Plugin::as_str).to_vec());
    let modifier = prop::string::string_regex("[a-z][a-z0-9_]{0,6}(\\.[a-z0-9]{1,5})?")
        .expect("valid regex")
        .boxed();
    let key = prop::string::string_regex("[a-z][a-z0-9-]{0,6}")
        .expect("valid regex")
        .boxed();
    prop_oneof![
        plugin.clone().prop_map(|p| format!("data-{p}")),
        (plugin.clone(), modifier.clone()).prop_map(|(p, m)| format!("data-{p}__{m}")),
        (plugin.clone(), key.clone()).prop_map(|(p, k)| format!("data-{p}:{k}")),
        (plugin, key, modifier).prop_map(|(p, k, m)| format!("data-{p}:{k}__{m}")),
    ]
}

// -- Test Helpers --

fn canonical(source: &str) -> Result<String, String> {
    let interner = StringInterner::new();
    match dsx_parse::parse(source, &interner) {
        Ok(parsed) => Ok(format_root(parsed.root, &parsed.arena, &interner)),
        Err(error) => Err(error.to_string()),
    }
}

/// parse -> print -> parse -> print must stabilize after the first print.
fn check_fixed_point(source: &str) -> Result<(), TestCaseError> {
    let first = canonical(source).map_err(|error| {
        TestCaseError::fail(format!(
            "generated source failed to parse: {source:?}: {error}"
        ))
    })?;
    let second = canonical(&first).map_err(|error| {
        TestCaseError::fail(format!(
            "canonical output failed to re-parse: {first:?}: {error}"
        ))
    })?;
    if second != first {
        return Err(TestCaseError::fail(format!(
            "canonical form drifted:\n  source: {source:?}\n   first: {first:?}\n  second: {second:?}"
        )));
    }
    Ok(())
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_expressions_reach_a_fixed_point(source in expr_strategy(3)) {
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_statement_sequences_reach_a_fixed_point(source in sequence_strategy()) {
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_assignments_reach_a_fixed_point(source in assignment_strategy(2)) {
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_attribute_names_reach_a_fixed_point(source in attribute_strategy()) {
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_nested_parens_reach_a_fixed_point(depth in 1usize..30) {
        let mut source = "$x".to_string();
        for _ in 0..depth {
            source = format!("({source} + 1)");
        }
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_operator_chains_reach_a_fixed_point(
        ops in prop::collection::vec(
            prop::sample::select(BinaryOp::ALL.map(BinaryOp::symbol).to_vec()),
            1..6,
        ),
    ) {
        let mut source = "1".to_string();
        for (i, op) in ops.iter().enumerate() {
            source = format!("{source} {op} {}", i + 2);
        }
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_string_contents_survive_reprinting(
        content in "[a-zA-Z0-9 _.:,!?@#%&*<>=+-]{0,20}",
    ) {
        let source = format!("'{content}'");
        check_fixed_point(&source)?;
    }

    #[test]
    fn prop_escaped_quotes_roundtrip(words in prop::collection::vec("[a-z]{1,5}", 1..4)) {
        let source = format!("'{}'", words.join("\\'"));
        check_fixed_point(&source)?;
    }
}
