use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use std::env;
use std::io::Error;

include!("src/cli.rs");

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=COMPLETIONS_TARGET");

    let Some(outdir) = env::var_os("COMPLETIONS_TARGET") else {
        return Ok(());
    };

    let mut cmd = Args::command();
    let bin_name = String::from(cmd.get_name());
    for &shell in Shell::value_variants() {
        generate_to(shell, &mut cmd, &bin_name, &outdir)?;
    }

    Ok(())
}
