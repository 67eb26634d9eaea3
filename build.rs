#[macro_use]
extern crate clap;

use clap::Shell;
use std::{env, path::PathBuf};

#[path = "src/cli.rs"]
mod cli;

fn main() {
    let mut out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };
    // target/<profile>/build/<package>-<hash>/out
    out_dir.pop();
    out_dir.pop();
    out_dir.pop();

    let mut cli = cli::generate_cli();
    cli.gen_completions("droid-features", Shell::Bash, &out_dir);
    cli.gen_completions("droid-features", Shell::Fish, &out_dir);
    cli.gen_completions("droid-features", Shell::Zsh, out_dir);
}
