//! Run a script of operations against a min-tracking stack.

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;
use log::*;

use beginner_dsa::stack::{MinStack, prelude::*};

const DEMO_SCRIPT: &str = "push:-2 push:0 push:-3 min pop top min";

/// A single scripted stack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackOp {
    Push(i32),
    Pop,
    Top,
    Min,
}

impl FromStr for StackOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pop" => Ok(StackOp::Pop),
            "top" => Ok(StackOp::Top),
            "min" => Ok(StackOp::Min),
            _ => {
                let value = s
                    .strip_prefix("push:")
                    .ok_or_else(|| format!("unknown operation {:?}", s))?;
                value
                    .parse()
                    .map(StackOp::Push)
                    .map_err(|e| format!("invalid push value {:?}: {}", value, e))
            }
        }
    }
}

impl StackOp {
    /// Apply the operation, returning the line to print for queries.
    fn apply<S: MinTracking>(self, stack: &mut S) -> Result<Option<String>, EmptyStackError> {
        match self {
            StackOp::Push(value) => {
                stack.push(value);
                Ok(None)
            }
            StackOp::Pop => {
                stack.pop();
                Ok(None)
            }
            StackOp::Top => Ok(Some(format!("Top: {}", stack.top()?))),
            StackOp::Min => Ok(Some(format!("Minimum: {}", stack.get_min()?))),
        }
    }
}

/// Push, pop and query a stack that tracks its minimum.
#[derive(Parser, Debug)]
struct MinStackCLI {
    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
    /// Increase logging verbosity (can be repeated)
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    verbose: u8,

    /// Operations: push:<int>, pop, top or min (defaults to a short demo)
    #[arg(name = "OP")]
    ops: Vec<StackOp>,
}

impl MinStackCLI {
    fn init_logging(&self) -> Result<()> {
        let mut verbose: usize = 2;
        if self.verbose > 0 {
            verbose += self.verbose as usize;
        } else if self.quiet {
            verbose -= 1;
        }

        stderrlog::new()
            .module(module_path!())
            .module("beginner_dsa")
            .verbosity(verbose)
            .init()?;
        Ok(())
    }

    fn script(&self) -> Result<Vec<StackOp>> {
        if self.ops.is_empty() {
            DEMO_SCRIPT
                .split_whitespace()
                .map(|op| op.parse().map_err(anyhow::Error::msg))
                .collect()
        } else {
            Ok(self.ops.clone())
        }
    }
}

fn main() -> Result<()> {
    let cli = MinStackCLI::parse();
    cli.init_logging()?;

    let script = cli.script()?;
    info!("running {} stack operations", script.len());

    let mut stack = MinStack::new();
    for op in script {
        debug!("applying {:?}", op);
        if let Some(line) = op.apply(&mut stack)? {
            println!("{}", line);
        }
    }
    Ok(())
}
