use std::error::Error;

use clap::{App, Arg};
use tabjoin::join::JoinMode;
use tabjoin::pipeline::JoinSpec;

pub fn app() -> App<'static, 'static> {
    App::new("tabjoin")
        .version(crate_version!())
        .about("joins two tab-delimited files on a key field, the UNIX join way.")
        .arg(
            Arg::with_name("LEFT_FILE")
                .help("the left (first) input file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("RIGHT_FILE")
                .help("the right (second) input file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("LEFT_FIELD")
                .help("1-based join field in the left file")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("RIGHT_FIELD")
                .help("1-based join field in the right file")
                .required(true)
                .index(4),
        )
        .arg(
            Arg::with_name("MODE")
                .help("V prints the left lines with no match; any other value prints the matched lines")
                .required(true)
                .index(5),
        )
        .arg(
            Arg::with_name("OUTPUT_FILE")
                .help("the file the joined lines are written to")
                .required(true)
                .index(6),
        )
}

pub struct Args {
    spec: JoinSpec,
}

impl Args {
    pub fn parse() -> Result<Args, Box<dyn Error>> {
        let matches = app().get_matches();

        let left_path = matches.value_of("LEFT_FILE").ok_or("expected LEFT_FILE")?;
        let right_path = matches.value_of("RIGHT_FILE").ok_or("expected RIGHT_FILE")?;
        let left_key = validate_field(
            matches.value_of("LEFT_FIELD").ok_or("expected LEFT_FIELD")?,
            "left",
        )?;
        let right_key = validate_field(
            matches
                .value_of("RIGHT_FIELD")
                .ok_or("expected RIGHT_FIELD")?,
            "right",
        )?;
        let mode = JoinMode::from_flag(matches.value_of("MODE").ok_or("expected MODE")?);
        let out_path = matches
            .value_of("OUTPUT_FILE")
            .ok_or("expected OUTPUT_FILE")?;

        let spec = JoinSpec::new(left_path, right_path, left_key, right_key, mode, out_path);
        Ok(Args { spec: spec })
    }

    pub fn into_spec(self) -> JoinSpec {
        self.spec
    }
}

// 1-based at the command line, 0-based inside
pub fn validate_field(s: &str, which: &str) -> Result<usize, Box<dyn Error>> {
    let i = s
        .parse::<usize>()
        .map_err(|_| format!("could not parse the {} field parameter <{}>", which, s))?;
    if i < 1 {
        return Err("the field parameters use 1-based numbering".into());
    }
    Ok(i - 1)
}
