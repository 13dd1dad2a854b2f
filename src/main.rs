mod repl;

use std::process::exit;

use clap::{Parser, Subcommand};
use lispy::{
    eval::DEFAULT_MAX_DEPTH,
    parse,
    syntax::{count_nodes, TreeDisplay},
    Evaluator,
};

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    init_tracing();

    let app = App::parse();
    let session = Session {
        evaluator: Evaluator::with_max_depth(app.max_depth),
        tree: app.tree,
    };

    match app.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run(&session),
        Command::Eval { exprs } => {
            let mut failed = false;
            for input in &exprs {
                failed |= !session.line(input);
            }
            if failed {
                exit(1)
            }
            Ok(())
        }
    }
}

/// Only install a subscriber when `RUST_LOG` asks for one
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

#[derive(Parser)]
#[command(version, about = "An S-expression calculator")]
struct App {
    #[command(subcommand)]
    command: Option<Command>,
    /// Print the syntax tree and its node count before each result
    #[arg(long, global = true)]
    tree: bool,
    /// Deepest S-expression nesting to evaluate. The parser rejects input
    /// nested past roughly a thousand levels regardless of this limit.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session
    #[command(alias = "r")]
    Repl,
    /// Evaluate each argument and print the results
    #[command(alias = "e")]
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        exprs: Vec<String>,
    },
}

struct Session {
    evaluator: Evaluator,
    tree: bool,
}

impl Session {
    /// Evaluate and print one line. Returns false if it did not parse.
    fn line(&self, input: &str) -> bool {
        match parse(input) {
            Ok(root) => {
                if self.tree {
                    print!("{}", TreeDisplay(&root));
                    println!("{} nodes", count_nodes(&root));
                }
                println!("{}", self.evaluator.eval(lispy::read(&root)));
                true
            }
            Err(e) => {
                println!("{}", e);
                false
            }
        }
    }
}
