use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use log::LevelFilter;

use tutorial2bash::ConverterConfig;

fn make_app() -> Command {
    Command::new("tutorial2bash")
        .about("Turn an annotated markdown or html tutorial into a bash script")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Markdown file to parse."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Name of the bash output file."),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding the default output and bootstrap line."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Log more, repeat for even more."),
        )
}

fn init_logger(verbosity: u8) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let Some(input) = matches.get_one::<PathBuf>("file") else {
        println!("Please provide md file by using -f option");
        return Ok(());
    };

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    let converter = config.create_converter();

    converter
        .run(input, matches.get_one::<PathBuf>("output").map(PathBuf::as_path))
        .with_context(|| format!("Could not convert {:?} into a bash script", input))?;
    Ok(())
}

fn main() {
    let matches = make_app().get_matches();
    init_logger(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}
