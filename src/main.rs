use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use minicalc::{Binding, Context, error::RuntimeError, parse, parse_strict};
use tracing_subscriber::EnvFilter;

/// Expressions evaluated when none are given.
const DEMO_EXPRESSIONS: [&str; 10] = ["5 + 3",
                                      "10 - x",
                                      "x * y",
                                      "y / z",
                                      "(x + y) * z",
                                      "x + y * z",
                                      "(x + y) * (z + 1)",
                                      "100 / (x - y)",
                                      "x + y + z",
                                      "x * y / z"];

/// Malformed expressions shown after the demo set, each failing differently.
const DEMO_ERRORS: [&str; 6] = ["5 +", "x *", "10 / 0", "(x + y", "x + unknown", "5 + * 3"];

/// minicalc evaluates integer arithmetic over `+ - * /`, parentheses and
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable before evaluation, e.g. `--var x=10`. Repeatable.
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    vars: Vec<Binding>,

    /// Reads expressions from a file, one per line. Blank lines and lines
    /// starting with `#` are skipped.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Rejects input that has tokens left over after a complete expression.
    #[arg(long)]
    strict: bool,

    /// Prints the fully parenthesised expression tree next to each result.
    #[arg(long)]
    tree: bool,

    /// Expressions to evaluate. Without any (and without `--file`) a
    /// demonstration set is evaluated with x=10, y=5 and z=2.
    expressions: Vec<String>,
}

/// Everything a run prints, and whether any user expression failed.
#[derive(Debug)]
struct Outcome {
    lines:  Vec<String>,
    failed: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();
    tracing::trace!("CLI args = {:?}", args);

    let outcome = run(&args)?;
    for line in &outcome.lines {
        println!("{line}");
    }

    Ok(if outcome.failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Evaluates the expressions selected by `args`.
///
/// Failures in the demonstration set are expected and never mark the run as
/// failed.
fn run(args: &Args) -> anyhow::Result<Outcome> {
    let mut expressions = args.expressions.clone();
    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).with_context(|| {
                                                   format!("failed to read the input file '{}'",
                                                           path.display())
                                               })?;
        expressions.extend(script_lines(&script));
    }

    if expressions.is_empty() && args.file.is_none() {
        return Ok(run_demo(args));
    }

    let context = user_context(args);
    let mut lines = Vec::with_capacity(expressions.len());
    let mut failed = false;
    for source in &expressions {
        let line = report(source, &context, args);
        failed |= line.is_err();
        lines.push(line.unwrap_or_else(|e| e));
    }

    Ok(Outcome { lines, failed })
}

/// Evaluates the demonstration set, letting `--var` override the defaults.
fn run_demo(args: &Args) -> Outcome {
    let mut context: Context = [("x", 10), ("y", 5), ("z", 2)].into_iter().collect();
    context.extend(user_context(args).iter());

    let mut lines = vec!["=== Expression Evaluation ===".to_string()];
    lines.extend(DEMO_EXPRESSIONS.iter()
                                 .map(|source| report(source, &context, args).unwrap_or_else(|e| e)));
    lines.push(String::new());
    lines.push("=== Error Cases ===".to_string());
    lines.extend(DEMO_ERRORS.iter()
                            .map(|source| report(source, &context, args).unwrap_or_else(|e| e)));

    Outcome { lines, failed: false }
}

fn user_context(args: &Args) -> Context {
    args.vars
        .iter()
        .map(|binding| (binding.name.clone(), binding.value))
        .collect()
}

/// Evaluates one expression into its result line.
///
/// `Ok` holds `'<expr>' = <value>`; `Err` holds
/// `error evaluating '<expr>': <message>`. An undefined variable also lists
/// every unbound name in the expression, not only the first one hit.
fn report(source: &str, context: &Context, args: &Args) -> Result<String, String> {
    let parsed = if args.strict { parse_strict(source) } else { parse(source) };
    let expr = parsed.map_err(|e| format!("error evaluating '{source}': {e}"))?;

    match context.eval(&expr) {
        Ok(value) if args.tree => Ok(format!("'{source}' = {value}    {expr}")),
        Ok(value) => Ok(format!("'{source}' = {value}")),
        Err(e @ RuntimeError::UndefinedVariable { .. }) => {
            let unbound: Vec<_> = expr.variables()
                                      .into_iter()
                                      .filter(|name| !context.contains(name))
                                      .collect();
            Err(format!("error evaluating '{source}': {e} (unbound: {})",
                        unbound.join(", ")))
        },
        Err(e) => Err(format!("error evaluating '{source}': {e}")),
    }
}

/// Yields the expression lines of a script file.
fn script_lines(script: &str) -> impl Iterator<Item = String> + '_ {
    script.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty() && !line.starts_with('#'))
          .map(str::to_string)
}
