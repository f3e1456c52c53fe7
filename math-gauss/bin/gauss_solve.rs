use clap::Parser;
use math_audio_gauss::{
    LinearSystemSolver, SolveReport, SystemFile, generate_solvable_system,
    generate_solvable_system_seeded,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "gauss_solve",
    about = "Solve a dense linear system by Gaussian elimination and print the step trace"
)]
struct Args {
    /// JSON file with "matrix", "rhs" and an optional "solver" section
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random solvable system of this size (1 to 10) instead of reading one
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random (a fresh system is drawn on every run otherwise)
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Save the system that was solved to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Leave the step trace out of the report
    #[arg(long)]
    quiet: bool,
}

fn load_system(args: &Args) -> Result<SystemFile, Box<dyn std::error::Error>> {
    match (&args.input, args.random) {
        (Some(path), _) => {
            log::info!("Loading system from {}", path.display());
            Ok(SystemFile::from_file(path)?)
        }
        (None, Some(size)) => {
            log::info!("Generating random {size}x{size} system");
            let system = match args.seed {
                Some(seed) => generate_solvable_system_seeded(size, seed)?,
                None => generate_solvable_system(size, &mut rand::rng())?,
            };
            Ok(system.into())
        }
        (None, None) => Err("either --input or --random must be given".into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut system = match load_system(&args) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    };
    if args.quiet {
        system.solver.emit_log = false;
    }

    if let Some(path) = &args.save {
        system.to_file(path)?;
        log::info!("Saved system to {}", path.display());
    }

    let solver = LinearSystemSolver::new();
    let solution = match solver.solve(&system.matrix, &system.rhs) {
        Ok(solution) => solution,
        Err(err) if err.is_singular() => {
            eprintln!("Error: the system of equations has no solution ({err})");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let report = SolveReport::new(&system.matrix, &system.rhs, &solution, &system.solver)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
