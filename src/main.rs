use clap::Parser;
use colored::*;
use gcalc::format::to_fixed;
use gcalc::{evaluate, DISPLAY_DIGITS};
use tracing_subscriber::EnvFilter;

mod repl;

/// Command-line calculator for `+ - * /` and parentheses with
/// arbitrary-precision decimals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Do not load or save line history.
    #[arg(long)]
    no_history: bool,

    /// Log each evaluation stage to stderr.
    #[arg(short, long)]
    debug: bool,

    /// Evaluate this expression, print the result and exit.
    expression: Option<String>,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GCALC_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> rustyline::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(expression) = args.expression {
        match evaluate(expression.trim()) {
            Ok(value) => println!("{}", to_fixed(&value, DISPLAY_DIGITS)),
            Err(err) => {
                let c = repl::COLOURS.error;
                eprintln!("{}", format!("Error: {}", err).truecolor(c.0, c.1, c.2));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let history = if args.no_history {
        None
    } else {
        repl::history_path()
    };
    repl::run(history)
}
