//! Command handlers for the `dsx` CLI.
//!
//! Each command takes one attribute string, runs it through the pipeline,
//! and prints what it found. Parse failures render through the diagnostic
//! emitter on stderr and exit with code 1.

use std::io::IsTerminal;

use dsx_diagnostic::emitter::{ColorMode, TerminalEmitter};
use dsx_ir::{
    Attribute, AttributeDetail, ElementRange, ExprArena, ExprId, ExprKind, Modifier, Property,
    PropertyKey, Root, SignalLink, StmtKind, StringInterner, StringLookup, TokenKind,
};
use dsx_parse::{ParseError, ParseOutput};

/// Options every input-taking command shares.
pub struct Invocation {
    pub input: Input,
    pub color: ColorMode,
}

/// Where the input text comes from.
pub enum Input {
    /// Inline text from `-e`.
    Inline(String),
    /// A path to read.
    File(String),
}

impl Input {
    /// The input text: inline text as given, file contents with the
    /// trailing newline stripped.
    pub fn load(&self) -> String {
        match self {
            Input::Inline(text) => {
                tracing::debug!("using inline input");
                text.clone()
            }
            Input::File(path) => {
                tracing::debug!(path = path.as_str(), "reading input");
                let content = read_file(path);
                content.trim_end_matches(['\n', '\r']).to_string()
            }
        }
    }
}

/// Parse the arguments that follow a subcommand: `-e <expr>`,
/// `--color <auto|always|never>`, and one positional file path.
pub fn parse_invocation(args: &[String]) -> Result<Invocation, String> {
    let mut input: Option<Input> = None;
    let mut color = ColorMode::Auto;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-e" => {
                let Some(text) = args.get(i + 1) else {
                    return Err("expected an expression after -e".to_string());
                };
                if input.is_some() {
                    return Err("more than one input given".to_string());
                }
                input = Some(Input::Inline(text.clone()));
                i += 2;
            }
            "--color" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("expected auto, always, or never after --color".to_string());
                };
                color = match value.as_str() {
                    "auto" => ColorMode::Auto,
                    "always" => ColorMode::Always,
                    "never" => ColorMode::Never,
                    other => {
                        return Err(format!(
                            "unknown color mode '{other}' (expected auto, always, or never)"
                        ));
                    }
                };
                i += 2;
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{flag}'"));
            }
            path => {
                // A second positional is usually an unquoted expression
                // falling apart in the shell; refuse rather than guess.
                if input.is_some() {
                    return Err(format!("unexpected argument '{path}'"));
                }
                input = Some(Input::File(path.to_string()));
                i += 1;
            }
        }
    }

    let Some(input) = input else {
        return Err("no input: pass a file path or -e <expr>".to_string());
    };
    Ok(Invocation { input, color })
}

/// `parse`: parse the input and print the tree.
pub fn run_parse(source: &str, color: ColorMode) {
    let interner = StringInterner::new();
    match dsx_parse::parse(source, &interner) {
        Ok(output) => print!("{}", render_tree(&output, &interner)),
        Err(error) => report_and_exit(source, &error, color),
    }
}

/// `attr`: parse the input as an attribute name and print its parts.
pub fn run_attr(source: &str, color: ColorMode) {
    let interner = StringInterner::new();
    match dsx_parse::parse_attribute(source, &interner) {
        Ok(output) => print!("{}", render_tree(&output, &interner)),
        Err(error) => report_and_exit(source, &error, color),
    }
}

/// `fmt`: parse the input and print its canonical form.
pub fn run_fmt(source: &str, color: ColorMode) {
    let interner = StringInterner::new();
    match dsx_parse::parse(source, &interner) {
        Ok(output) => println!("{}", dsx_fmt::format_root(output.root, &output.arena, &interner)),
        Err(error) => report_and_exit(source, &error, color),
    }
}

/// `tokens`: print the token list, one token per line with its span.
pub fn run_tokens(source: &str) {
    let interner = StringInterner::new();
    let tokens = dsx_lexer::lex(source, &interner);
    println!("{} tokens:", tokens.len());
    for token in &tokens {
        println!("  {} @ {}", describe_token(token.kind, &interner), token.span);
    }
}

/// Render the error through the terminal emitter and exit.
fn report_and_exit(source: &str, error: &ParseError, color: ColorMode) -> ! {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty);
    emitter.emit(source, &error.to_diagnostic());
    emitter.flush();
    std::process::exit(1);
}

/// Read an input file, exiting with a readable message when that fails.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let message = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => format!("'{path}' is not valid UTF-8"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

/// One line per token, with interned payloads resolved back to text.
fn describe_token(kind: TokenKind, names: &impl StringLookup) -> String {
    match kind {
        TokenKind::Number(bits) => format!("number {}", f64::from_bits(bits)),
        TokenKind::String(name) => format!("string {:?}", names.resolve(name)),
        TokenKind::Ident(name) => format!("ident {}", names.resolve(name)),
        TokenKind::Signal(name) => format!("signal ${}", names.resolve(name)),
        TokenKind::Action(name) => format!("action @{}", names.resolve(name)),
        TokenKind::UnterminatedString | TokenKind::Error | TokenKind::Eof => {
            kind.display_name().to_string()
        }
        other => format!("`{}`", other.display_name()),
    }
}

/// Renders a parse result as an indented tree, one node per line.
fn render_tree(output: &ParseOutput, names: &impl StringLookup) -> String {
    let mut tree = TreeWriter {
        arena: &output.arena,
        names,
        out: String::new(),
    };
    tree.root(output.root);
    tree.out
}

struct TreeWriter<'a, L> {
    arena: &'a ExprArena,
    names: &'a L,
    out: String,
}

impl<'a, L: StringLookup> TreeWriter<'a, L> {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn root(&mut self, root: Root) {
        match root {
            Root::Attribute(attribute) => self.attribute(attribute),
            Root::Statement(id) => {
                let kind = self.arena.get_stmt(id).kind;
                self.stmt(0, kind);
            }
            Root::Sequence(range) => {
                self.line(0, "sequence");
                let stmts = self.arena.get_stmts(range);
                for stmt in stmts {
                    self.stmt(1, stmt.kind);
                }
            }
        }
    }

    fn attribute(&mut self, attribute: Attribute) {
        let family = if attribute.plugin.is_pro() {
            "pro"
        } else {
            "standard"
        };
        self.line(
            0,
            &format!("attribute data-{} ({family})", attribute.plugin.as_str()),
        );
        match attribute.detail {
            AttributeDetail::Plain => {}
            AttributeDetail::Modified(modifier) => self.modifier(1, modifier),
            AttributeDetail::Keyed { key, modifier } => {
                let text = self.names.resolve(key);
                self.line(1, &format!("key {text}"));
                if let Some(modifier) = modifier {
                    self.modifier(2, modifier);
                }
            }
        }
    }

    fn modifier(&mut self, depth: usize, modifier: Modifier) {
        let name = self.names.resolve(modifier.name);
        match modifier.arg {
            Some(arg) => {
                let arg = self.names.resolve(arg);
                self.line(depth, &format!("modifier {name} (arg {arg})"));
            }
            None => self.line(depth, &format!("modifier {name}")),
        }
    }

    fn stmt(&mut self, depth: usize, kind: StmtKind) {
        match kind {
            StmtKind::Expr(expr) => self.expr(depth, expr),
            StmtKind::Assign { target, op, value } => {
                self.line(depth, &format!("assign {}", op.symbol()));
                self.expr(depth + 1, target);
                self.expr(depth + 1, value);
            }
        }
    }

    fn expr(&mut self, depth: usize, id: ExprId) {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Number(bits) => {
                self.line(depth, &format!("number {}", f64::from_bits(bits)));
            }
            ExprKind::String(name) => {
                let text = self.names.resolve(name);
                self.line(depth, &format!("string {text:?}"));
            }
            ExprKind::Bool(value) => self.line(depth, &format!("bool {value}")),
            ExprKind::Null => self.line(depth, "null"),
            ExprKind::Undefined => self.line(depth, "undefined"),
            ExprKind::Ident(name) => {
                let text = self.names.resolve(name);
                self.line(depth, &format!("ident {text}"));
            }
            ExprKind::Signal { head, chain } => {
                let text = self.names.resolve(head);
                self.line(depth, &format!("signal ${text}"));
                let links = self.arena.get_links(chain);
                for link in links {
                    match *link {
                        SignalLink::Member { name, optional, .. } => {
                            let text = self.names.resolve(name);
                            let dot = if optional { "?." } else { "." };
                            self.line(depth + 1, &format!("{dot}{text}"));
                        }
                        SignalLink::Index { index, optional, .. } => {
                            self.line(depth + 1, if optional { "?.[]" } else { "[]" });
                            self.expr(depth + 2, index);
                        }
                    }
                }
            }
            ExprKind::ActionCall { name, args } => {
                let text = self.names.resolve(name);
                self.line(depth, &format!("action @{text}"));
                self.elements(depth + 1, args);
            }
            ExprKind::Array(elements) => {
                self.line(depth, "array");
                self.elements(depth + 1, elements);
            }
            ExprKind::Object(properties) => {
                self.line(depth, "object");
                let properties = self.arena.get_properties(properties);
                for property in properties {
                    match *property {
                        Property::Entry { key, value, .. } => {
                            match key {
                                PropertyKey::Ident(name) => {
                                    let text = self.names.resolve(name);
                                    self.line(depth + 1, &format!("entry {text}"));
                                }
                                PropertyKey::String(name) => {
                                    let text = self.names.resolve(name);
                                    self.line(depth + 1, &format!("entry {text:?}"));
                                }
                                PropertyKey::Computed(expr) => {
                                    self.line(depth + 1, "entry [computed]");
                                    self.expr(depth + 2, expr);
                                }
                            }
                            self.expr(depth + 2, value);
                        }
                        Property::Spread { expr, .. } => {
                            self.line(depth + 1, "spread");
                            self.expr(depth + 2, expr);
                        }
                    }
                }
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.line(depth, &format!("binary {}", op.symbol()));
                self.expr(depth + 1, lhs);
                self.expr(depth + 1, rhs);
            }
            ExprKind::Unary { op, operand } => {
                self.line(depth, &format!("unary {}", op.symbol()));
                self.expr(depth + 1, operand);
            }
            ExprKind::Postfix { op, operand } => {
                self.line(depth, &format!("postfix {}", op.symbol()));
                self.expr(depth + 1, operand);
            }
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.line(depth, "conditional");
                self.expr(depth + 1, test);
                self.expr(depth + 1, consequent);
                self.expr(depth + 1, alternate);
            }
            ExprKind::Call { callee, args } => {
                self.line(depth, "call");
                self.expr(depth + 1, callee);
                self.elements(depth + 1, args);
            }
            ExprKind::Member {
                object,
                property,
                optional,
            } => {
                let text = self.names.resolve(property);
                let dot = if optional { "?." } else { "." };
                self.line(depth, &format!("member {dot}{text}"));
                self.expr(depth + 1, object);
            }
            ExprKind::Index {
                object,
                index,
                optional,
            } => {
                self.line(depth, if optional { "index ?.[]" } else { "index []" });
                self.expr(depth + 1, object);
                self.expr(depth + 1, index);
            }
            ExprKind::Paren(inner) => {
                self.line(depth, "paren");
                self.expr(depth + 1, inner);
            }
            ExprKind::Arrow { params, body } => {
                let params = self.arena.get_params(params);
                let param_names: Vec<&str> =
                    params.iter().map(|p| self.names.resolve(p.name)).collect();
                self.line(depth, &format!("arrow ({})", param_names.join(", ")));
                self.expr(depth + 1, body);
            }
        }
    }

    fn elements(&mut self, depth: usize, range: ElementRange) {
        let elements = self.arena.get_elements(range);
        for element in elements {
            if element.is_spread {
                self.line(depth, "spread");
                self.expr(depth + 1, element.value);
            } else {
                self.expr(depth, element.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn invocation(list: &[&str]) -> Invocation {
        match parse_invocation(&args(list)) {
            Ok(invocation) => invocation,
            Err(message) => panic!("expected an invocation for {list:?}: {message}"),
        }
    }

    fn tree(source: &str) -> String {
        let interner = StringInterner::new();
        let output = match dsx_parse::parse(source, &interner) {
            Ok(output) => output,
            Err(error) => panic!("parse failed for {source:?}: {error}"),
        };
        render_tree(&output, &interner)
    }

    #[test]
    fn inline_input() {
        let invocation = invocation(&["-e", "$count + 1"]);
        let Input::Inline(text) = invocation.input else {
            panic!("expected inline input");
        };
        assert_eq!(text, "$count + 1");
        assert_eq!(invocation.color, ColorMode::Auto);
    }

    #[test]
    fn positional_input_is_a_path() {
        let invocation = invocation(&["page-attr.txt", "--color", "never"]);
        let Input::File(path) = invocation.input else {
            panic!("expected file input");
        };
        assert_eq!(path, "page-attr.txt");
        assert_eq!(invocation.color, ColorMode::Never);
    }

    #[test]
    fn color_modes() {
        let cases = [
            ("auto", ColorMode::Auto),
            ("always", ColorMode::Always),
            ("never", ColorMode::Never),
        ];
        for (value, expected) in cases {
            assert_eq!(invocation(&["--color", value, "-e", "1"]).color, expected);
        }
    }

    #[test]
    fn bad_arguments_are_refused() {
        assert!(parse_invocation(&args(&[])).is_err());
        assert!(parse_invocation(&args(&["-e"])).is_err());
        assert!(parse_invocation(&args(&["--color"])).is_err());
        assert!(parse_invocation(&args(&["--color", "sometimes", "-e", "1"])).is_err());
        assert!(parse_invocation(&args(&["--fast", "-e", "1"])).is_err());
        assert!(parse_invocation(&args(&["a.txt", "-e", "1"])).is_err());
        // An unquoted expression arrives as several positionals.
        assert!(parse_invocation(&args(&["-e", "$count", "+", "1"])).is_err());
    }

    #[test]
    fn tree_shows_binary_structure() {
        assert_eq!(tree("$count + 1"), "binary +\n  signal $count\n  number 1\n");
    }

    #[test]
    fn tree_nests_a_sequence() {
        let expected = "\
sequence
  assign =
    signal $open
    unary !
      signal $open
  action @post
    string \"/save\"
";
        assert_eq!(tree("$open = !$open; @post('/save')"), expected);
    }

    #[test]
    fn tree_marks_optional_links_and_spreads() {
        let expected = "\
binary ??
  signal $items
    ?.[]
      number 0
  array
    spread
      signal $rest
";
        assert_eq!(tree("$items?.[0] ?? [...$rest]"), expected);
    }

    #[test]
    fn tree_labels_object_entries() {
        let expected = "\
object
  entry id
    number 1
  entry \"data-key\"
    bool true
  entry [computed]
    signal $field
    null
";
        assert_eq!(tree("{ id: 1, 'data-key': true, [$field]: null }"), expected);
    }

    #[test]
    fn tree_shows_attribute_parts() {
        let interner = StringInterner::new();
        let output = match dsx_parse::parse_attribute("data-on:click__debounce.500ms", &interner)
        {
            Ok(output) => output,
            Err(error) => panic!("attribute parse failed: {error}"),
        };
        let expected = "\
attribute data-on (standard)
  key click
    modifier debounce (arg 500ms)
";
        assert_eq!(render_tree(&output, &interner), expected);
    }

    #[test]
    fn token_descriptions_resolve_names() {
        let interner = StringInterner::new();
        let tokens = dsx_lexer::lex("$user.name ?? 'anon'", &interner);
        let described: Vec<String> = tokens
            .iter()
            .map(|t| describe_token(t.kind, &interner))
            .collect();
        assert_eq!(
            described.join("; "),
            "signal $user; `.`; ident name; `??`; string \"anon\"; end of input"
        );
    }
}
