use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mazra::assess::assess;
use mazra::config::{Lang, ThemePreference};
use mazra::land::{resolve_soil, SOIL_TYPES};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// One-shot evaluation printed to stdout (default values for any flag
    /// left unset)
    Eval {
        /// Soil type, by Arabic name or English alias (e.g. "sandy loam")
        #[arg(long)]
        soil: Option<String>,

        /// Soil pH, 4.0 to 9.0
        #[arg(long)]
        ph: Option<f64>,

        /// Annual rainfall in mm, 0 to 2000
        #[arg(long)]
        rainfall: Option<u32>,

        /// Average temperature in °C, 0 to 50
        #[arg(long)]
        temperature: Option<u32>,

        /// Soil salinity in dS/m, 0.0 to 10.0
        #[arg(long)]
        salinity: Option<f64>,

        /// Output format (defaults to table)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the crop reference catalog
    Catalog,
}

#[derive(Parser, Debug)]
#[command(name = "mazra")]
#[command(about = "Land evaluation and crop recommendation", long_about = None)]
#[command(version)]
struct Cli {
    /// Print per-crop criterion breakdowns (eval only)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/mazra/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Display language (overrides config)
    #[arg(long, value_enum, global = true)]
    lang: Option<CliLang>,

    /// Color theme for the interactive view (overrides config)
    #[arg(long, value_enum, global = true)]
    theme: Option<CliTheme>,

    /// Interactive form by default; subcommands for scripted use
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLang {
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliTheme {
    Dark,
    Light,
    Auto,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.clone().map(PathBuf::from);
    let config = match mazra::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate configured defaults at startup
    if let Err(errors) = mazra::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let lang = match cli.lang {
        Some(CliLang::Ar) => Lang::Ar,
        Some(CliLang::En) => Lang::En,
        None => config.lang(),
    };
    let theme_preference = match cli.theme {
        Some(CliTheme::Dark) => ThemePreference::Dark,
        Some(CliTheme::Light) => ThemePreference::Light,
        Some(CliTheme::Auto) => ThemePreference::Auto,
        None => config.theme(),
    };

    match cli.command {
        None => {
            let theme = mazra::tui::resolve_theme(theme_preference);
            let mut tui_config = config;
            tui_config.lang = Some(lang);
            let app = mazra::tui::App::new(&tui_config, theme);
            if let Err(e) = mazra::tui::run_tui(app).await {
                eprintln!("TUI error: {}", e);
                std::process::exit(EXIT_INPUT);
            }
        }
        Some(Commands::Eval {
            soil,
            ph,
            rainfall,
            temperature,
            salinity,
            format,
        }) => {
            let mut conditions = config.initial_conditions();

            if let Some(soil_input) = soil {
                match resolve_soil(&soil_input) {
                    Some(soil_type) => conditions.soil = soil_type.name.to_string(),
                    None => {
                        eprintln!("Unknown soil type '{}'. Valid types:", soil_input);
                        for soil_type in &SOIL_TYPES {
                            eprintln!("  - {}", soil_type.display());
                        }
                        std::process::exit(EXIT_INPUT);
                    }
                }
            }
            if let Some(ph) = ph {
                conditions.ph = ph;
            }
            if let Some(rainfall) = rainfall {
                conditions.rainfall = rainfall;
            }
            if let Some(temperature) = temperature {
                conditions.temperature = temperature;
            }
            if let Some(salinity) = salinity {
                conditions.salinity = salinity;
            }

            // Collection boundary: reject out-of-slider-bounds values here,
            // not in the scorer.
            if let Err(errors) = mazra::land::validate_conditions(&conditions) {
                eprintln!("Invalid input:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INPUT);
            }

            if cli.verbose {
                eprintln!(
                    "Evaluating soil='{}' ph={} rainfall={}mm temperature={}°C salinity={}dS/m",
                    conditions.soil,
                    conditions.ph,
                    conditions.rainfall,
                    conditions.temperature,
                    conditions.salinity
                );
            }

            let assessment = assess(&conditions);
            let use_colors = mazra::output::should_use_colors();

            match format.unwrap_or(OutputFormat::Table) {
                OutputFormat::Table => {
                    println!("{}", mazra::output::format_banner(&assessment, lang, use_colors));
                    println!();
                    println!("{}", mazra::output::format_table(&assessment, lang, use_colors));
                    if cli.verbose {
                        println!();
                        for eval in &assessment.all {
                            println!("{}", mazra::output::format_crop_detail(eval, use_colors));
                            println!();
                        }
                    }
                    println!();
                    println!("{}", mazra::output::format_disclaimer(lang));
                }
                OutputFormat::Tsv => {
                    let tsv = mazra::output::format_tsv(&assessment);
                    if !tsv.is_empty() {
                        println!("{}", tsv);
                    }
                }
                OutputFormat::Json => match mazra::output::format_json(&assessment) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to serialize results: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            }
        }
        Some(Commands::Catalog) => {
            let use_colors = mazra::output::should_use_colors();
            println!("{}", mazra::output::format_catalog(use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
