//! Renders the `component-steps(1)` manual page from the CLI definition.

use std::{env, error::Error, fs, path::PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

fn render_man() -> Result<Vec<u8>, Box<dyn Error>> {
    let mut page = Vec::new();
    Man::new(cli::Cli::command()).render(&mut page)?;
    Ok(page)
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let man_dir = manifest_dir.join("target").join("generated-man");
    fs::create_dir_all(&man_dir)?;
    fs::write(man_dir.join("component-steps.1"), render_man()?)?;
    Ok(())
}
