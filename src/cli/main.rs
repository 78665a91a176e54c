use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
    time::Duration,
};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use sbva::{
    config::{Config, Tiebreak},
    context::Context,
};

fn cli() -> Command {
    Command::new("sbva")
        .about("Shrinks a CNF formula by structured bounded variable addition")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("input")
            .index(1)
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS CNF file to read (standard input if omitted)."))

        .arg(Arg::new("output")
            .index(2)
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("The file to write the transformed CNF to (standard output if omitted)."))

        .arg(Arg::new("verb")
            .short('v')
            .long("verb")
            .value_name("LEVEL")
            .value_parser(value_parser!(u8))
            .required(false)
            .num_args(1)
            .help("The level to which details of the transformation are logged.
Default: 0

  - 0: warnings only
  - 1: a summary of each replacement and budget stop
  - 2: a trace of each matrix, extension, and heuristic score"))

        .arg(Arg::new("proof")
            .short('p')
            .long("proof")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("Record each clause addition and deletion, written to PATH as DRAT-style text."))

        .arg(Arg::new("steps")
            .short('s')
            .long("steps")
            .value_name("MILLIONS")
            .value_parser(value_parser!(i64))
            .required(false)
            .num_args(1)
            .help("The step budget, in millions of computation steps.
Default: no limit

Steps are spent roughly in proportion to clause scans, clause differences, and heuristic evaluations; the budget is examined between pivots, so the transformation always stops at a consistent formula."))

        .arg(Arg::new("maxreplace")
            .short('m')
            .long("maxreplace")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The replacement budget: stop after introducing COUNT fresh variables (0 for no limit).
Default: 0"))

        .arg(Arg::new("normal")
            .short('n')
            .long("normal")
            .action(ArgAction::SetTrue)
            .help("Break ties between candidate literals in sorted order rather than by the three-hop heuristic (equivalent to original BVA)."))

        .arg(Arg::new("timeout")
            .short('t')
            .long("timeout")
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The wall-clock budget for the transformation, in seconds.
Default: no limit"))

        .arg(Arg::new("clscutoff")
            .long("clscutoff")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Replace only matrices of at least COUNT matched clauses.
Setting either cutoff swaps the default profitability gate for the configured floors."))

        .arg(Arg::new("litscutoff")
            .long("litscutoff")
            .value_name("COUNT")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Replace only matrices of at least COUNT matched literals."))

        .arg(Arg::new("countpreserve")
            .short('c')
            .long("countpreserve")
            .action(ArgAction::SetTrue)
            .help("Add one clause per replacement so the model count of the formula is preserved, not merely satisfiability."))
}

fn config_from_args(args: &ArgMatches) -> Config {
    let mut config = Config::default();

    if let Some(millions) = args.get_one::<i64>("steps") {
        config.steps = millions.saturating_mul(1_000_000);
    }

    if let Some(count) = args.get_one::<usize>("maxreplace") {
        config.max_replacements = *count;
    }

    if let Some(seconds) = args.get_one::<u64>("timeout") {
        config.time_limit = Some(Duration::from_secs(*seconds));
    }

    config.clause_cutoff = args.get_one::<usize>("clscutoff").copied();
    config.literal_cutoff = args.get_one::<usize>("litscutoff").copied();
    config.preserve_model_count = args.get_flag("countpreserve");
    config.generate_proof = args.contains_id("proof");

    config
}

fn main() {
    let matches = cli().get_matches();

    let filter = match matches.get_one::<u8>("verb").copied().unwrap_or(0) {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();

    let config = config_from_args(&matches);

    let tiebreak = match matches.get_flag("normal") {
        true => Tiebreak::None,
        false => Tiebreak::ThreeHop,
    };

    let parse_result = match matches.get_one::<PathBuf>("input") {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("c Error: could not open {} for reading: {e}", path.display());
                    std::process::exit(1);
                }
            };
            match path.extension() {
                Some(extension) if extension == "xz" => Context::from_dimacs(
                    BufReader::new(xz2::read::XzDecoder::new(file)),
                    config,
                ),
                _ => Context::from_dimacs(BufReader::new(file), config),
            }
        }
        None => Context::from_dimacs(std::io::stdin().lock(), config),
    };

    let mut ctx = match parse_result {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("c Error: {e}");
            std::process::exit(1);
        }
    };

    ctx.run(tiebreak);

    let write_result = match matches.get_one::<PathBuf>("output") {
        Some(path) => match File::create(path) {
            Ok(file) => {
                let mut writer = BufWriter::new(file);
                ctx.write_dimacs(&mut writer).and_then(|_| writer.flush())
            }
            Err(e) => {
                eprintln!("c Error: could not open {} for writing: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            ctx.write_dimacs(&mut writer).and_then(|_| writer.flush())
        }
    };

    if let Err(e) = write_result {
        eprintln!("c Error: could not write the formula: {e}");
        std::process::exit(1);
    }

    if let Some(path) = matches.get_one::<PathBuf>("proof") {
        let proof_result = match File::create(path) {
            Ok(file) => {
                let mut writer = BufWriter::new(file);
                ctx.write_proof(&mut writer).and_then(|_| writer.flush())
            }
            Err(e) => {
                eprintln!("c Error: could not open {} for writing: {e}", path.display());
                std::process::exit(1);
            }
        };
        if let Err(e) = proof_result {
            eprintln!("c Error: could not write the proof: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let matches = cli().get_matches_from(["sbva"]);
        let config = config_from_args(&matches);

        assert_eq!(config.steps, i64::MAX);
        assert_eq!(config.max_replacements, 0);
        assert_eq!(config.time_limit, None);
        assert!(!config.generate_proof);
        assert!(!config.preserve_model_count);
        assert!(!matches.get_flag("normal"));
    }

    #[test]
    fn budgets_and_switches() {
        let matches = cli().get_matches_from([
            "sbva",
            "-s", "2",
            "-m", "7",
            "-t", "30",
            "-n",
            "-c",
            "--clscutoff", "4",
            "in.cnf",
            "out.cnf",
        ]);
        let config = config_from_args(&matches);

        assert_eq!(config.steps, 2_000_000);
        assert_eq!(config.max_replacements, 7);
        assert_eq!(config.time_limit, Some(Duration::from_secs(30)));
        assert_eq!(config.clause_cutoff, Some(4));
        assert_eq!(config.literal_cutoff, None);
        assert!(config.preserve_model_count);
        assert!(matches.get_flag("normal"));

        assert_eq!(
            matches.get_one::<PathBuf>("input"),
            Some(&PathBuf::from("in.cnf"))
        );
        assert_eq!(
            matches.get_one::<PathBuf>("output"),
            Some(&PathBuf::from("out.cnf"))
        );
    }

    #[test]
    fn proof_enables_generation() {
        let matches = cli().get_matches_from(["sbva", "-p", "proof.drat"]);
        let config = config_from_args(&matches);
        assert!(config.generate_proof);
    }
}
