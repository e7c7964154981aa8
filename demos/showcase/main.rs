use clap::{App, Arg, ArgMatches};
use rain_static::control::rec::{factorial, loop_depth, unroll_in};
use rain_static::control::switch::Case;
use rain_static::control::ternary::Branch;
use rain_static::showcase;
use std::error::Error;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn app() -> App<'static, 'static> {
    App::new("rain-static")
        .about("Runs the rain-static sample program, or resolves the given keys at runtime")
        .arg(
            Arg::with_name("factorial")
                .long("factorial")
                .value_name("N")
                .allow_hyphen_values(true)
                .help("Prints the factorial of N"),
        )
        .arg(
            Arg::with_name("loop")
                .long("loop")
                .value_name("DEPTH")
                .allow_hyphen_values(true)
                .help("Unrolls a loop of the given depth, at most 65536"),
        )
        .arg(
            Arg::with_name("switch")
                .long("switch")
                .value_name("KEY")
                .multiple(true)
                .allow_hyphen_values(true)
                .help("Runs the switch case for each key"),
        )
        .arg(
            Arg::with_name("if")
                .long("if")
                .value_name("BOOL")
                .possible_values(&["true", "false"])
                .help("Runs the conditional branch for the given key"),
        )
        .arg(
            Arg::with_name("log")
                .long("log")
                .value_name("FILTER")
                .help("Sets the log filter, overriding RUST_LOG"),
        )
}

fn init_logging(matches: &ArgMatches) {
    let filter = match matches.value_of("log") {
        Some(filter) => EnvFilter::new(filter),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let runtime = ["factorial", "loop", "switch", "if"]
        .iter()
        .any(|arg| matches.is_present(arg));
    if !runtime {
        tracing::debug!("no runtime keys given, running the sample program");
        showcase::run()?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Some(n) = matches.value_of("factorial") {
        let n: i64 = n.parse()?;
        writeln!(out, "Factorial of {} is: {}.", n, factorial(n)?)?;
    }
    if let Some(depth) = matches.value_of("loop") {
        let depth = loop_depth(depth.parse::<i64>()?)?;
        unroll_in(depth, &mut out)?;
        writeln!(out)?;
    }
    if let Some(b) = matches.value_of("if") {
        Branch::from(b.parse::<bool>()?).exec_in(&mut out)?;
    }
    if let Some(keys) = matches.values_of("switch") {
        for k in keys {
            Case::resolve(k.parse::<i128>()?).exec_in(&mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let matches = app().get_matches();
    init_logging(&matches);
    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
