use rigid_body_convert::cli::{Command, USAGE};
use rigid_body_convert::convert_file;

use std::env;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    match Command::from_args(&args) {
        Command::Usage => print!("{}", USAGE),
        Command::Convert(path) => {
            if let Err(error) = convert_file(&path) {
                eprintln!("error: {}", error);
                process::exit(1);
            }
        }
    }
}
