use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use impact_calc::model::{ImpactOptions, InputVector};
use impact_calc::report::{self, ImpactReport, ModelKind};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Aligned, colored when stdout is a terminal
    Table,
    /// Tab-separated, for scripting
    Tsv,
    /// Full reports as JSON
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank configured scenarios by impact (default if no subcommand)
    List,
    /// Show the full report of a ranked scenario by its index number
    Show {
        /// Index number of the scenario (1-based, as shown in list)
        index: usize,
    },
    /// Score a single set of inputs without a config file
    Score {
        /// Program budget
        #[arg(allow_hyphen_values = true)]
        budget: f64,
        /// Internet coverage in percent (0-100)
        #[arg(allow_hyphen_values = true)]
        internet: f64,
        /// Share of staff trained (0-1)
        #[arg(allow_hyphen_values = true)]
        training: f64,
        /// Community engagement (0-1)
        #[arg(allow_hyphen_values = true)]
        community: f64,
        /// Scoring model
        #[arg(long, value_enum, default_value_t = ModelKind::Enhanced)]
        model: ModelKind,
        /// Treat the program as rural
        #[arg(long)]
        rural: bool,
        /// Socioeconomic multiplier on community engagement
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        socioeconomic: f64,
        /// Skip the diminishing returns adjustment
        #[arg(long)]
        no_diminishing_returns: bool,
        /// Label used in the report
        #[arg(long, default_value = "scenario")]
        name: String,
    },
    /// Write a starter config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "impact-calc")]
#[command(about = "Projected impact of technology-access programs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/impact-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Reject out-of-range inputs instead of scoring them
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    impact_calc::logging::init_cli_logger(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List);
    let code = match command {
        Commands::List => run_ranked(cli.config, cli.strict, cli.format, None),
        Commands::Show { index } => run_ranked(cli.config, cli.strict, cli.format, Some(index)),
        Commands::Score {
            budget,
            internet,
            training,
            community,
            model,
            rural,
            socioeconomic,
            no_diminishing_returns,
            name,
        } => {
            let inputs = InputVector::new(budget, internet, training, community);
            let options = ImpactOptions {
                is_rural: rural,
                socioeconomic_level: socioeconomic,
                apply_diminishing_returns: !no_diminishing_returns,
            };
            run_score(&name, inputs, model, options, cli.strict, cli.format)
        }
        Commands::Init { force } => match impact_calc::config::write_starter_config(cli.config, force) {
            Ok(path) => {
                println!("Wrote starter config to {}", path.display());
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                EXIT_CONFIG
            }
        },
    };

    std::process::exit(code);
}

fn print_validation_errors(errors: &[String]) {
    eprintln!("Input errors:");
    for error in errors {
        eprintln!("  - {}", error);
    }
}

fn run_score(
    name: &str,
    inputs: InputVector,
    model: ModelKind,
    options: ImpactOptions,
    strict: bool,
    format: OutputFormat,
) -> i32 {
    if strict {
        if let Err(errors) = report::validate_scenario(name, &inputs, &options) {
            print_validation_errors(&errors);
            return EXIT_CONFIG;
        }
    }

    let report = ImpactReport::build(name, inputs, model, options);
    print_reports(std::slice::from_ref(&report), format, true)
}

fn run_ranked(
    config_path: Option<PathBuf>,
    strict_flag: bool,
    format: OutputFormat,
    index: Option<usize>,
) -> i32 {
    let config = match impact_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    if config.scenarios.is_empty() {
        eprintln!("No scenarios configured in config file.");
        eprintln!("Add scenarios to ~/.config/impact-calc/config.yaml or run `impact-calc init`:");
        eprintln!("  scenarios:");
        eprintln!("    - name: district-a");
        eprintln!("      budget: 2500");
        eprintln!("      internet: 75");
        eprintln!("      training: 0.5");
        eprintln!("      community: 0.4");
        return EXIT_CONFIG;
    }

    let strict = strict_flag || config.strict;
    let reports = match report::evaluate_scenarios(&config, strict) {
        Ok(r) => r,
        Err(errors) => {
            print_validation_errors(&errors);
            return EXIT_CONFIG;
        }
    };
    tracing::debug!(count = reports.len(), model = config.model.as_str(), "ranked scenarios");

    match index {
        None => print_reports(&reports, format, false),
        Some(index) => {
            // Validate index bounds (1-based)
            if index < 1 || index > reports.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    reports.len()
                );
                return EXIT_CONFIG;
            }
            print_reports(std::slice::from_ref(&reports[index - 1]), format, true)
        }
    }
}

fn print_reports(reports: &[ImpactReport], format: OutputFormat, detail: bool) -> i32 {
    let use_colors = impact_calc::output::should_use_colors();
    match format {
        OutputFormat::Table if detail => {
            let details: Vec<String> = reports
                .iter()
                .map(|r| impact_calc::output::format_report_detail(r, use_colors))
                .collect();
            println!("{}", details.join("\n\n"));
        }
        OutputFormat::Table => {
            println!("{}", impact_calc::output::format_report_table(reports, use_colors));
        }
        OutputFormat::Tsv => {
            println!("{}", impact_calc::output::format_tsv(reports));
        }
        OutputFormat::Json => match impact_calc::output::format_json(reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_FAILURE;
            }
        },
    }
    EXIT_SUCCESS
}
