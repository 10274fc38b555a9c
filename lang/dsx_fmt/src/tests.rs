use pretty_assertions::assert_eq;

use dsx_ir::{ExprKind, Root, StmtKind, StringInterner};

use super::*;

fn canon(source: &str) -> String {
    let interner = StringInterner::new();
    let parsed = match dsx_parse::parse(source, &interner) {
        Ok(parsed) => parsed,
        Err(error) => panic!("parse failed for {source:?}: {error}"),
    };
    format_root(parsed.root, &parsed.arena, &interner)
}

/// Printing, re-parsing, and printing again must not change the text.
fn assert_fixed_point(source: &str) {
    let first = canon(source);
    let second = canon(&first);
    assert_eq!(second, first, "canonical form drifted for {source:?}");
}

#[test]
fn binary_spacing_normalizes() {
    assert_eq!(canon("1+2*3"), "1 + 2 * 3");
    assert_eq!(canon("$a??$b||$c"), "$a ?? $b || $c");
}

#[test]
fn explicit_parens_survive() {
    assert_eq!(canon("(1+2)*3"), "(1 + 2) * 3");
    assert_eq!(canon("((1))"), "((1))");
}

#[test]
fn separators_normalize_to_commas() {
    assert_eq!(
        canon("$open = !$open; @post('/save')"),
        "$open = !$open, @post('/save')"
    );
    assert_eq!(canon("1, 2; 3"), "1, 2, 3");
}

#[test]
fn assignment_operators_keep_their_spelling() {
    assert_eq!(canon("$x+=1"), "$x += 1");
    assert_eq!(canon("$flag??=true"), "$flag ??= true");
    assert_eq!(canon("$bits>>>=2"), "$bits >>>= 2");
}

#[test]
fn signal_chains_print_compactly() {
    assert_eq!(canon("$user.profile[0]?.name"), "$user.profile[0]?.name");
    assert_eq!(canon("$fetch-user.is-loading"), "$fetch-user.is-loading");
}

#[test]
fn quote_styles_normalize_to_single() {
    assert_eq!(canon("\"hi\""), "'hi'");
    assert_eq!(canon("`template`"), "'template'");
}

#[test]
fn string_escapes_reprint() {
    assert_eq!(canon(r"'it\'s'"), r"'it\'s'");
    assert_eq!(canon(r"'line\nbreak'"), r"'line\nbreak'");
    assert_eq!(canon(r"'a\\b'"), r"'a\\b'");
    assert_eq!(canon(r"'A\x42'"), "'AB'");
    assert_eq!(canon(r#""double \" quote""#), r#"'double " quote'"#);
}

#[test]
fn numbers_print_plain_decimal() {
    assert_eq!(canon("2e3"), "2000");
    assert_eq!(canon("1.50"), "1.5");
    assert_eq!(canon("42"), "42");
    assert_eq!(canon("0.125"), "0.125");
}

#[test]
fn overflowed_literals_have_a_canonical_spelling() {
    assert_eq!(canon("1e999"), "2e308");
    assert_eq!(canon("2e308"), "2e308");
}

#[test]
fn trailing_commas_drop() {
    assert_eq!(canon("[1,2,]"), "[1, 2]");
    assert_eq!(canon("{a:1,}"), "{ a: 1 }");
}

#[test]
fn spreads_print_with_ellipsis() {
    assert_eq!(canon("[...$items,4]"), "[...$items, 4]");
    assert_eq!(canon("@post('/save',...$extra)"), "@post('/save', ...$extra)");
}

#[test]
fn objects_space_inside_braces() {
    assert_eq!(
        canon("{count:1,'b-c':2,[key]:3,...$rest}"),
        "{ count: 1, 'b-c': 2, [key]: 3, ...$rest }"
    );
    assert_eq!(canon("{}"), "{}");
    assert_eq!(canon("{ in: 1 }"), "{ in: 1 }");
}

#[test]
fn arrows_print_with_spaced_fat_arrow() {
    assert_eq!(canon("x=>x+1"), "x => x + 1");
    assert_eq!(canon("(a,b)=>a"), "(a, b) => a");
    assert_eq!(canon("()=>1"), "() => 1");
    assert_eq!(canon("a=>b=>a+b"), "a => b => a + b");
}

#[test]
fn ternary_spacing() {
    assert_eq!(canon("$a?1:2"), "$a ? 1 : 2");
    assert_eq!(canon("$a ? 1 : $b ? 2 : 3"), "$a ? 1 : $b ? 2 : 3");
}

#[test]
fn word_operators_keep_their_space() {
    assert_eq!(canon("typeof x"), "typeof x");
    assert_eq!(canon("'key' in $store"), "'key' in $store");
    assert_eq!(canon("!$open"), "!$open");
}

#[test]
fn stacked_signs_stay_separated() {
    assert_eq!(canon("- -$x"), "- -$x");
    assert_eq!(canon("+ +1"), "+ +1");
    assert_eq!(canon("-+1"), "-+1");
}

#[test]
fn postfix_attaches_to_its_operand() {
    assert_eq!(canon("$count++"), "$count++");
    assert_eq!(canon("$stock.level--"), "$stock.level--");
}

#[test]
fn call_chains_print_tight() {
    assert_eq!(canon("handlers[0](1,2)"), "handlers[0](1, 2)");
    assert_eq!(canon("response?.body"), "response?.body");
    assert_eq!(canon("registry.delete"), "registry.delete");
    assert_eq!(
        canon("$items.filter(item => item.active).length"),
        "$items.filter(item => item.active).length"
    );
}

#[test]
fn attribute_names_print_verbatim() {
    assert_eq!(canon("data-show"), "data-show");
    assert_eq!(
        canon("data-on:click__debounce.500ms"),
        "data-on:click__debounce.500ms"
    );
    assert_eq!(canon("data-signals__ifmissing"), "data-signals__ifmissing");
    assert_eq!(
        canon("data-class:hidden__ifmissing"),
        "data-class:hidden__ifmissing"
    );
}

#[test]
fn format_expr_prints_a_subtree() {
    let interner = StringInterner::new();
    let parsed = match dsx_parse::parse("$a + 1", &interner) {
        Ok(parsed) => parsed,
        Err(error) => panic!("parse failed: {error}"),
    };
    let Root::Statement(stmt) = parsed.root else {
        panic!("single expression parses to a statement root");
    };
    let StmtKind::Expr(expr) = parsed.arena.get_stmt(stmt).kind else {
        panic!("bare expressions become expression statements");
    };
    assert_eq!(format_expr(expr, &parsed.arena, &interner), "$a + 1");
    let ExprKind::Binary { lhs, .. } = parsed.arena.get_expr(expr).kind else {
        panic!("addition parses to a binary node");
    };
    assert_eq!(format_expr(lhs, &parsed.arena, &interner), "$a");
}

#[test]
fn canonical_form_is_a_fixed_point() {
    let sources = [
        "$count",
        "$user.profile[0].name",
        "$fetch-user.is-loading",
        "@get('/api', { id: $id })",
        "[1, [2, [3]]]",
        "{ a: { b: { c: 1 } } }",
        "$a ?? $b || $c && $d",
        "1 + 2 * 3 ** 4 % 5",
        "2 ** 3 ** 2",
        "- -1",
        "typeof void delete $x",
        "$a ? $b ? 1 : 2 : 3",
        "(x => x * 2)(21)",
        "$err instanceof TypeError",
        "'key' in $store",
        "$form.fields[0].value = $input, $dirty = true",
        "$x <<= 2; $y >>>= 1",
        "$mode = $dark ? 'night' : 'day'",
        "window.location.href",
        "@post('/save', ...$extra)",
        "{ 'a b': 1, [k]: 2 }",
        "$items?.[0]?.label",
        "data-on-signal-patch-filter",
        "data-attr:aria-level2",
        "data-on:submit__prevent_default",
    ];
    for source in sources {
        assert_fixed_point(source);
    }
}
