#![forbid(unsafe_code)]

use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use srcviz::cli::Args;
use std::fs;
use std::path::PathBuf;

/// Render shell completions and the man page for `srcviz` into `dist/`.
fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    fs::create_dir_all(&completions_dir)?;
    fs::create_dir_all(&man_dir)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let mut cmd = Args::command();
        let written = generate_to(shell, &mut cmd, "srcviz", &completions_dir)?;
        eprintln!("wrote {}", written.display());
    }

    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    let man_path = man_dir.join("srcviz.1");
    fs::write(&man_path, buffer)?;
    eprintln!("wrote {}", man_path.display());
    Ok(())
}
