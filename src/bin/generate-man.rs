//! Writes the taskpad man page(s) to the directory given as the first
//! argument (default: `man`).

use clap::CommandFactory;
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;
use taskpad::cli::Cli;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));
    fs::create_dir_all(&out_dir)?;

    let cmd = Cli::command();
    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(out_dir.join("taskpad.1"), buffer)?;

    for sub in cmd.get_subcommands() {
        let name = format!("taskpad-{}", sub.get_name());
        let mut buffer = Vec::new();
        Man::new(sub.clone()).render(&mut buffer)?;
        fs::write(out_dir.join(format!("{}.1", name)), buffer)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}
