//! Command-line front end for the Datastar expression parser.
//!
//! `dsx` takes one attribute string per invocation, inline via `-e` or read
//! from a file, and parses, formats, or tokenizes it. Set `DSX_LOG` to see
//! parser tracing, e.g. `DSX_LOG=dsx_parse=trace`.

mod commands;

use commands::Invocation;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => {
            let invocation = invocation_or_exit(command, &args[2..]);
            commands::run_parse(&invocation.input.load(), invocation.color);
        }
        "attr" => {
            let invocation = invocation_or_exit(command, &args[2..]);
            commands::run_attr(&invocation.input.load(), invocation.color);
        }
        "fmt" => {
            let invocation = invocation_or_exit(command, &args[2..]);
            commands::run_fmt(&invocation.input.load(), invocation.color);
        }
        "tokens" => {
            let invocation = invocation_or_exit(command, &args[2..]);
            commands::run_tokens(&invocation.input.load());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("dsx {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse subcommand arguments, exiting with usage on bad ones.
fn invocation_or_exit(command: &str, args: &[String]) -> Invocation {
    match commands::parse_invocation(args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Usage: dsx {command} [--color <auto|always|never>] (-e <expr> | <file>)");
            std::process::exit(1);
        }
    }
}

/// Route `tracing` events to stderr when `DSX_LOG` asks for them.
///
/// `DSX_LOG` takes an `EnvFilter` directive such as `dsx_parse=debug` or
/// `trace`. Unset means no subscriber is installed at all.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("DSX_LOG").is_ok() {
        let filter = EnvFilter::from_env("DSX_LOG");
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn print_usage() {
    println!("Datastar expression tool");
    println!();
    println!("Usage: dsx <command> [--color <auto|always|never>] (-e <expr> | <file>)");
    println!();
    println!("Commands:");
    println!("  parse     Parse input and print the tree");
    println!("  attr      Parse input as an attribute name and print its parts");
    println!("  fmt       Parse input and print its canonical form");
    println!("  tokens    Print the token list");
    println!("  help      Show this help message");
    println!("  version   Show version information");
    println!();
    println!("Options:");
    println!("  -e <expr>    Take the input from the command line instead of a file");
    println!("  --color <auto|always|never>");
    println!("               When to color diagnostics (default: auto)");
    println!();
    println!("Examples:");
    println!("  dsx parse -e '$count + 1'");
    println!("  dsx fmt -e '$open = !$open; @post(\"/save\")'");
    println!("  dsx attr -e 'data-on:click__debounce.500ms'");
    println!("  dsx tokens -e '$items[0]?.label'");
    println!("  dsx fmt --color never page-attr.txt");
}
