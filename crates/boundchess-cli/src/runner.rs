//! Batch-runner glue (§5, §6): loads each scenario, solves it, and renders
//! the results with the exit-code semantics §6 specifies — full success,
//! partial failure, or total failure.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use tracing::{info, warn};

use crate::cli::Cli;
use crate::error::CliError;
use crate::scenario_io::{CountsOutput, load_scenario};

/// Load, validate, and solve one scenario file.
fn process_one(path: &Path) -> Result<CountsOutput, CliError> {
    let scenario = load_scenario(path)?;
    let counts = boundchess_engine::solve(&scenario);
    Ok(CountsOutput::new(&scenario, counts))
}

/// Evaluate every scenario in `paths` across up to `jobs` OS threads. Each
/// slot is written exactly once by whichever thread claims its index, so
/// the returned `Vec` preserves input order regardless of completion order
/// (§6: "Output order always follows input order regardless of `--jobs`").
fn run_parallel(paths: &[std::path::PathBuf], jobs: usize) -> Vec<Result<CountsOutput, CliError>> {
    let slots: Mutex<Vec<Option<Result<CountsOutput, CliError>>>> =
        Mutex::new((0..paths.len()).map(|_| None).collect());
    let next = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..jobs {
            scope.spawn(|| {
                loop {
                    let i = next.fetch_add(1, Ordering::SeqCst);
                    if i >= paths.len() {
                        break;
                    }
                    let result = process_one(&paths[i]);
                    slots.lock().unwrap()[i] = Some(result);
                }
            });
        }
    });

    slots
        .into_inner()
        .unwrap()
        .into_iter()
        .map(|slot| slot.expect("every index is claimed exactly once"))
        .collect()
}

/// Run the full CLI: load and solve every scenario, print the JSON result,
/// and return the process exit code (§6).
pub fn run(cli: Cli) -> ExitCode {
    let requested = cli.scenarios.len();
    let jobs = cli.jobs.max(1);

    let results = if jobs <= 1 || requested <= 1 {
        cli.scenarios.iter().map(|p| process_one(p)).collect::<Vec<_>>()
    } else {
        run_parallel(&cli.scenarios, jobs)
    };

    let mut outputs = Vec::with_capacity(requested);
    let mut failures = 0usize;
    for (path, result) in cli.scenarios.iter().zip(results) {
        match result {
            Ok(output) => {
                info!(path = %path.display(), "scenario processed");
                outputs.push(output);
            }
            Err(err) => {
                warn!(path = %err.path().display(), error = %err, "scenario failed");
                failures += 1;
            }
        }
    }

    if outputs.is_empty() {
        return ExitCode::from(2);
    }

    print_outputs(&outputs, requested == 1, cli.pretty);

    if failures > 0 { ExitCode::from(1) } else { ExitCode::SUCCESS }
}

fn print_outputs(outputs: &[CountsOutput], single: bool, pretty: bool) {
    let rendered = if single {
        render(&outputs[0], pretty)
    } else {
        render(outputs, pretty)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("failed to serialize output: {err}"),
    }
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) }
}
