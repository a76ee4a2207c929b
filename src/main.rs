use std::fs;

use anyhow::Context as _;
use clap::Parser;
use mapscript::{Context, evaluate, interpreter::lexer::is_identifier, parse_assignments};
use tracing_subscriber::EnvFilter;

/// mapscript evaluates the expressions map-authoring macros embed in entity
/// properties, the way the macro tool would while expanding a map.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mapscript to read the source from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Treats the source as a batch of `name = expression;` assignments and
    /// prints every name it binds.
    #[arg(short, long)]
    assignments: bool,

    /// Binds NAME to the value of EXPR before evaluating the source. May be
    /// repeated; later bindings can use earlier ones.
    #[arg(short, long = "set", value_name = "NAME=EXPR")]
    set: Vec<String>,

    /// Leaves out the host library (`min`, `max`, `sqrt`, ...).
    #[arg(long)]
    no_builtins: bool,

    /// Logs more: `-v` for info, `-vv` for debug, `-vvv` for every
    /// shift and reduce. `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression or batch, or a path to it with `--file`.
    source: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = if args.file {
        fs::read_to_string(&args.source).with_context(|| {
                                            format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                    args.source)
                                        })?
    } else {
        args.source.clone()
    };

    let mut context = if args.no_builtins {
        Context::new()
    } else {
        Context::with_builtins()
    };

    for binding in &args.set {
        let (name, expr) = binding.split_once('=')
                                  .with_context(|| format!("Expected NAME=EXPR, found '{binding}'"))?;
        let name = name.trim();
        anyhow::ensure!(is_identifier(name), "'{name}' in --set {binding} is not a valid name");

        let value = evaluate(expr, &context).with_context(|| format!("Failed to evaluate --set {name}"))?;
        context.bind(name, value);
    }

    if args.assignments {
        for assignment in parse_assignments(&source)? {
            context.apply_assignments(std::slice::from_ref(&assignment))?;
            let value = context.resolve(&assignment.name)
                               .map(ToString::to_string)
                               .unwrap_or_default();
            println!("{} = {value}", assignment.name);
        }
    } else {
        println!("{}", evaluate(&source, &context)?);
    }

    Ok(())
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, or by the
/// `--verbose` count when it is unset.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
