use std::{process::exit, sync::Arc};

use setup::{get_config_location, get_data_dir_location, install, load_lexicon, read_config};
use www::server;

#[tokio::main]
async fn main() {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    for arg in args.iter() {
        match arg.as_ref() {
            "-v" | "--version" => return print_version(),
            "-h" | "--help" => return print_help(),
            "-i" | "--init" => return install(),
            _ => {
                if arg.starts_with('-') {
                    eprintln!("unknown option: {}", arg);
                    exit(1);
                }
            }
        }
    }
    let config = read_config();
    let lexicon = match load_lexicon() {
        Ok(lexicon) => Arc::new(lexicon),
        Err(e) => {
            eprintln!("could not load lexicon: {}", e);
            exit(1);
        }
    };
    server(config, lexicon).await;
}

fn print_version() {
    println!("pagelens v{}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        "\nConfig files found at {}\nInstall files found at {}\n",
        format!("\x1b[38;5;47m{:#?}\x1b[0m", get_config_location().0),
        format!("\x1b[38;5;37m{:#?}\x1b[0m", get_data_dir_location())
    );
    print!(
        "Usage: pagelens [options]
        Options:
        -i, --init                   Initialize config, lexicon, and templates
        -v, --version                Print version.
        -h, --help                   Show this message.
        ",
    );
}
