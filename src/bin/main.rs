extern crate tabjoin;
#[macro_use]
extern crate clap;

mod args;

use std::process;

use args::Args;

fn main() {
    match Args::parse().and_then(|args| tabjoin::pipeline::run(&args.into_spec())) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
