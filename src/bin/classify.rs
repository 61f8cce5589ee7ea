use anyhow::{Context, Result};
use clap::Parser;
use perfect_number::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let items = perfect_number::read_items(&args.input_path).with_context(|| {
        format!(
            "Failed to read items from given input file({}).",
            args.input_path.display()
        )
    })?;

    for (item, classification) in perfect_number::classify_all(items.iter().map(|s| s.as_str())) {
        println!("{} is {}.", item, classification);
    }

    Ok(())
}
