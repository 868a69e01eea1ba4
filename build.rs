//! Generates the man page and shell completions from the clap
//! definition in src/cli.rs at build time.

use clap::CommandFactory;
use clap_complete::generate_to;
use clap_complete::shells::{Bash, Fish, Zsh};
use clap_mangen::Man;
use std::env;
use std::fs;

include!("src/cli.rs");

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return Ok(()),
    };

    let mut cmd = Cli::command();

    let man = Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("umctui.1"), buffer)?;

    generate_to(Bash, &mut cmd, "umctui", &out_dir)?;
    generate_to(Zsh, &mut cmd, "umctui", &out_dir)?;
    generate_to(Fish, &mut cmd, "umctui", &out_dir)?;

    Ok(())
}
