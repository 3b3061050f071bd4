use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the argument sets in src/lib.rs and src/bin/*.rs.
// Build scripts can't reach src/ modules, so the definitions are repeated here.
fn base_command(name: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .required(true)
                .index(1)
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let wiki2html = base_command("wiki2html")
        .arg(Arg::new("image-path").long("image-path"))
        .arg(Arg::new("file-path").long("file-path"));
    let wiki2md =
        base_command("wiki2md").arg(Arg::new("no-css").long("no-css").action(ArgAction::SetTrue));

    for (name, mut cmd) in [("wiki2html", wiki2html), ("wiki2md", wiki2md)] {
        generate_to(Bash, &mut cmd, name, &outdir)?;
        generate_to(Zsh, &mut cmd, name, &outdir)?;
        generate_to(Fish, &mut cmd, name, &outdir)?;
    }

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
