// src/cli.rs

use std::env;

use color_eyre::eyre::{bail, eyre, Result};

use crate::api::{self, Params};

pub fn run() -> Result<()> {
    let (params, target, first_only) = parse_cli()?;

    if first_only {
        if let Some(hit) = api::find_first(&params, &target)? {
            print_hit(hit);
        }
        return Ok(());
    }
    for hit in api::find(&params, &target)? {
        print_hit(hit);
    }
    Ok(())
}

// selector<TAB>index, index column blank when the selector is unique
fn print_hit((selector, index): (String, Option<usize>)) {
    match index {
        Some(i) => println!("{selector}\t{i}"),
        None => println!("{selector}\t"),
    }
}

fn parse_cli() -> Result<(Params, String, bool)> {
    let mut params = Params::new();
    let mut target: Option<String> = None;
    let mut first_only = false;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                params.url = Some(args.next().ok_or_else(|| eyre!("Missing value for --url"))?);
            }
            "--file" => {
                let path = args.next().ok_or_else(|| eyre!("Missing value for --file"))?;
                params.html = Some(std::fs::read_to_string(&path)?);
            }
            "--exact" => params.fuzzy = false,
            "--first" => first_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if !a.starts_with('-') && target.is_none() => target = Some(a),
            _ => bail!("Unknown arg: {}", a),
        }
    }

    let target = target.ok_or_else(|| eyre!("Missing target text (see --help)"))?;
    Ok((params, target, first_only))
}
