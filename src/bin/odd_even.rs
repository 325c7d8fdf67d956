//! Regroup a linked list by odd and even node positions.

use anyhow::Result;
use clap::Parser;
use log::*;

use beginner_dsa::linked_list::{node, odd_even};

const DEMO_LIST: [i32; 5] = [1, 2, 3, 4, 5];

/// Print a list before and after moving its even-position nodes to the back.
#[derive(Parser, Debug)]
struct OddEvenCLI {
    /// Suppress informational output
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
    /// Increase logging verbosity (can be repeated)
    #[arg(short='v', long="verbose", action=clap::ArgAction::Count)]
    verbose: u8,

    /// List values, front to back (defaults to 1 2 3 4 5)
    #[arg(name = "VALUE", allow_negative_numbers = true)]
    values: Vec<i32>,
}

impl OddEvenCLI {
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

    fn values(&self) -> Vec<i32> {
        if self.values.is_empty() {
            DEMO_LIST.to_vec()
        } else {
            self.values.clone()
        }
    }
}

fn main() -> Result<()> {
    let cli = OddEvenCLI::parse();
    cli.init_logging()?;

    let values = cli.values();
    info!("building a list of {} nodes", values.len());
    let head = node::from_values(values);

    println!("Original list:");
    println!("{}", node::render(&head));

    let head = odd_even::partition(head);

    println!("After grouping odd and even nodes:");
    println!("{}", node::render(&head));
    Ok(())
}
