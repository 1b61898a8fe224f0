//! Print the sample bookstore through every visualization.

use anyhow::Result;
use clap::Parser;
use slicebench::bookstore::Bookstore;
use slicebench::visualize::Visualization;

#[derive(Debug, Parser)]
#[command(name = "visualize")]
#[command(about = "Dump one object graph through several formatters", long_about = None)]
#[command(version)]
struct Cli {
    /// Only print these visualizations (1-7); repeatable
    #[arg(long, value_name = "N")]
    only: Vec<Visualization>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let selected: Vec<Visualization> = if cli.only.is_empty() {
        Visualization::ALL.to_vec()
    } else {
        cli.only
    };

    let bookstore = Bookstore::sample();
    for visualization in selected {
        log::debug!("rendering {}", visualization.title());
        match visualization.render(&bookstore) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                println!("{}", slicebench::visualize::SEPARATOR);
                println!("{}", e);
            }
        }
    }
    Ok(())
}
