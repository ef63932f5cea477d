use std::process;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use console::{Emoji, Style};

use sls_scaffold::{Opts, Scaffold};

#[derive(Parser)]
#[command(author, version, about, long_about=None)]
struct Cli {
    #[command(flatten)]
    opts: Opts,
}

fn run(cli: Cli) -> Result<()> {
    let generated = Scaffold::new(cli.opts)?.scaffold()?;

    let green = Style::new().green().bold();
    let cyan = Style::new().cyan();
    println!(
        "\n{} {}",
        Emoji("✨", ""),
        green.apply_to(format!(
            "Project '{}' created in {}",
            generated.request.package_name(),
            generated.path.display()
        )),
    );
    println!(
        "------------------------\n\n{}",
        cyan.apply_to(format!(
            "cd {}\nnpm run build\nnpm run deploy",
            generated.path.display()
        ))
    );

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // usage errors share the exit status of every other failure
            let _ = err.print();
            process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        let red = Style::new().red().bold();
        eprintln!("\n{}", red.apply_to(format!("❌ {err}")));
        process::exit(1);
    }
}
