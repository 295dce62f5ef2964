// Copyright (C) 2025 Nuwaira
// All Rights Reserved.
//
// NOTICE: All information contained herein is, and remains
// the property of Nuwaira.
// The intellectual and technical concepts contained
// herein are proprietary to Nuwaira
// and are protected by trade secret or copyright law.
// Dissemination of this information or reproduction of this material
// is strictly forbidden unless prior written permission is obtained
// from Nuwaira.
use clap::Parser;
use std::path::Path;
use std::process::exit;
use tracing_subscriber::EnvFilter;

mod config;
mod paths;
mod scan;
mod scope;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "pyfngrep")]
#[command(about = "Find the specified string/regex in Python source files")]
#[command(author, version, long_about=None)]
struct Args {
    #[arg(short, long, default_value = "pyfngrep.conf")]
    config: String,

    /// Ignore case. Default false.
    #[arg(short, long)]
    ignore_case: bool,

    /// String or regex pattern to search for
    pattern: String,

    /// File or directory to search (recursively)
    path: String,
}

fn parse_args() -> (Args, Config) {
    dotenv::dotenv().ok();

    let args = Args::parse();

    // A missing config file just means defaults; an unreadable or
    // malformed one is still an error.
    let config = if Path::new(&args.config).exists() {
        Config::from_file(&args.config).unwrap_or_else(|err| {
            eprintln!("Error reading config file {}: {}", args.config, err);
            exit(1);
        })
    } else {
        Config::default()
    };

    return (args, config);
}

fn main() {
    let (args, config) = parse_args();

    // Logs go to stderr so stdout stays clean for match output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = scan::run_search(&args.pattern, &args.path, args.ignore_case, &config, &mut out)
    {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}
