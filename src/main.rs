// Copyright 2026 The JsonSubset Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use json_subset::{CompareError, SubsetCheck, DEFAULT_MAX_DEPTH};

#[doc(hidden)]
#[macro_export]
macro_rules! handle_error {
    ($code:expr, $msg:expr, $($arg:tt)*) => {
        eprintln!($msg, $($arg)*);
        std::process::exit($code);
    };

    ($code:expr, $msg:expr) => {
        eprintln!($msg);
        std::process::exit($code);
    };
}

#[doc(hidden)]
struct Code;

impl Code {
    const SUCCESS: i32 = 0;
    const INTERNAL_ERROR: i32 = 1;
    const INVALID_ARGUMENT: i32 = 2;
    const PARSE_ERROR: i32 = 3;
    const NOT_SUBSET: i32 = 4;
}

#[doc(hidden)]
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON document expected to be contained in SUPERSET
    subset: PathBuf,

    /// JSON document to check against
    superset: PathBuf,

    /// Maximum nesting depth to follow before giving up
    #[clap(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Emit the divergence report as JSON on stdout instead of a table on stderr
    #[clap(long)]
    json: bool,
}

#[doc(hidden)]
fn read_file(path: &PathBuf) -> Vec<u8> {
    match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            handle_error!(
                Code::INVALID_ARGUMENT,
                "Error reading {}: {}",
                path.display(),
                err
            );
        }
    }
}

#[doc(hidden)]
fn main() {
    let cli = Cli::parse();

    let a = read_file(&cli.subset);
    let b = read_file(&cli.superset);

    let check = SubsetCheck::new().with_max_depth(cli.max_depth);

    let report = match check.check(&a, &b) {
        Ok(report) => report,
        Err(err @ CompareError::Parse { .. }) => {
            handle_error!(Code::PARSE_ERROR, "Error: {}", err);
        }
        Err(err) => {
            handle_error!(Code::INTERNAL_ERROR, "Error: {}", err);
        }
    };

    if report.is_subset() {
        println!(
            "{} is a subset of {}",
            cli.subset.display(),
            cli.superset.display()
        );
        std::process::exit(Code::SUCCESS);
    }

    println!(
        "{} is not a subset of {}",
        cli.subset.display(),
        cli.superset.display()
    );

    let rendered = if cli.json {
        serde_json::to_string_pretty(&report)
            .map(|json| println!("{}", json))
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))
    } else {
        report.write_table(&mut io::stderr())
    };

    if let Err(err) = rendered {
        handle_error!(Code::INTERNAL_ERROR, "Error: {}", err);
    }

    std::process::exit(Code::NOT_SUBSET);
}
