use std::path::PathBuf;

use anka_config::AnkaConfig;
use anka_dasha::dasha::{MahaDashaEntry, antar_rows};
use anka_dasha::{DashaLevel, DashaRow, DrillRequest, FixedRatioTable, Planet, drill, maha_timeline};
use anka_numerology::NumerologyReport;
use anka_time::{NaiveDate, format_ddmmyyyy, parse_date};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "anka", about = "Numerology and dasha period tables")]
struct Cli {
    /// Path to anka.toml (default: $ANKA_CONFIG, else built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lo Shu grid, driver/conductor, conductor series and name numbers
    Numerology {
        /// Date of birth (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        dob: String,
        /// Full name for Chaldean numbers
        #[arg(long)]
        name: Option<String>,
    },
    /// Eleven-entry Maha Dasha timeline
    Maha {
        /// Date of birth (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        dob: String,
        /// Also print the Antar Dasha rows of every entry
        #[arg(long)]
        expand: bool,
    },
    /// Antar Dasha rows of the Maha Dasha ending at an age
    Antar {
        /// Date of birth (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        dob: String,
        /// Maha Dasha planet (1-9 or name)
        #[arg(long)]
        planet: String,
        /// Age at which the Maha Dasha ends (below 9: pre-birth rows)
        #[arg(long, allow_hyphen_values = true)]
        age: i32,
    },
    /// Pratyantar Dasha rows of one Antar period
    Pratyantar {
        /// Period start (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        from: String,
        /// Period end (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        to: String,
        /// Antar planet (1-9 or name)
        #[arg(long)]
        planet: String,
        /// Maha planet above it (1-9 or name)
        #[arg(long)]
        parent: Option<String>,
    },
    /// Dainik Dasha rows of one Pratyantar period
    Dainik {
        /// Period start (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        from: String,
        /// Period end (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        to: String,
        /// Pratyantar planet (1-9 or name)
        #[arg(long)]
        planet: String,
        /// Antar planet above it (1-9 or name)
        #[arg(long)]
        parent: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn require_date(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or_else(|e| fail(e))
}

fn require_planet(s: &str) -> Planet {
    match s.trim().parse::<u8>() {
        Ok(n) => Planet::from_number(n)
            .unwrap_or_else(|| fail(format!("invalid planet id {n} (expected 1-9)"))),
        Err(_) => s.parse().unwrap_or_else(|e| fail(e)),
    }
}

fn load_config(path: Option<&PathBuf>) -> AnkaConfig {
    anka_config::load_or_default(path.map(PathBuf::as_path)).unwrap_or_else(|e| fail(e))
}

fn ratio_table(config: &AnkaConfig) -> Option<FixedRatioTable> {
    let table = config.active_ratio_table().unwrap_or_else(|e| fail(e));
    debug!(entries = table.as_ref().map_or(0, FixedRatioTable::len), "fixed-ratio table");
    table
}

fn print_rows(title: &str, rows: &[DashaRow]) {
    println!("{title}\n");
    println!("{:<8} {:>6}  {:<10}  {:<10}", "PLANET", "DAYS", "FROM", "TO");
    for row in rows {
        println!(
            "{:<8} {:>6}  {:<10}  {:<10}",
            row.period_name(),
            row.nominal_days,
            row.from_display(),
            row.to_display()
        );
    }
}

fn print_maha_entry(entry: &MahaDashaEntry) {
    println!(
        "{:>4}  {:<8} {:<8} {:<10}  {:<10}{}",
        entry.age,
        entry.planet.name(),
        entry.planet.english_name(),
        format_ddmmyyyy(entry.span.start),
        format_ddmmyyyy(entry.span.end),
        if entry.pre_birth { "  (pre-birth)" } else { "" }
    );
}

fn run_numerology(dob: &str, name: Option<&str>) {
    let birth = require_date(dob);
    let report = NumerologyReport::for_birth(birth, name).unwrap_or_else(|e| fail(e));

    println!("Numerology for {}\n", report.formatted_birth());
    println!("Driver (Mulaank):      {}", report.driver);
    println!("Conductor (Bhagyaank): {}", report.conductor);
    println!("Soul number:           {}", report.soul_number);
    println!("Conductor base:        {}", report.conductor_base);
    if let Some(n) = report.name_numbers {
        println!("Name number:           {}", n.name_number);
        println!("Soul urge:             {}", n.soul_urge);
        println!("Personality:           {}", n.personality);
    }

    println!("\nLo Shu grid (with driver and conductor):");
    let grid = report.display_grid();
    for row in grid.layout() {
        let cells: Vec<String> = row
            .iter()
            .map(|&(d, n)| {
                if n == 0 {
                    "-".to_string()
                } else {
                    d.to_string().repeat(n as usize)
                }
            })
            .collect();
        println!("  {:<6}{:<6}{:<6}", cells[0], cells[1], cells[2]);
    }
    let missing: Vec<String> = grid.missing().iter().map(u32::to_string).collect();
    if !missing.is_empty() {
        println!("Missing: {}", missing.join(", "));
    }

    println!("\nConductor series:");
    for (age, planet) in report.conductor_series.iter().zip(report.bottom_values) {
        println!("  {age:>4}  {planet}");
    }

    println!("\nPlanes:");
    if report.planes.is_empty() {
        println!("  No planes are formed.");
    }
    for plane in &report.planes {
        println!("  {}: {}", plane.name, plane.description);
    }
}

fn run_maha(dob: &str, expand: bool) {
    let birth = require_date(dob);
    let report = NumerologyReport::for_birth(birth, None).unwrap_or_else(|e| fail(e));
    let entries = maha_timeline(birth, &report.conductor_series, &report.bottom_values)
        .unwrap_or_else(|e| fail(e));

    println!("Maha Dasha timeline for {}\n", format_ddmmyyyy(birth));
    println!("{:>4}  {:<8} {:<8} {:<10}  {:<10}", "AGE", "PLANET", "", "FROM", "TO");
    for entry in &entries {
        print_maha_entry(entry);
        if expand {
            let rows = entry.antar_rows().unwrap_or_else(|e| fail(e));
            println!();
            print_rows(&format!("  {} Antar Dasha", entry.planet.name()), &rows);
            println!();
        }
    }
}

fn run_antar(dob: &str, planet: &str, age: i32) {
    let birth = require_date(dob);
    let planet = require_planet(planet);
    let rows = antar_rows(birth, planet.number(), age).unwrap_or_else(|e| fail(e));
    let title = format!(
        "{} for {} ({}, age {age})",
        DashaLevel::Antar.name(),
        format_ddmmyyyy(birth),
        planet.name()
    );
    print_rows(&title, &rows);
}

fn run_drill(
    level: DashaLevel,
    from: &str,
    to: &str,
    planet: &str,
    parent: Option<&str>,
    config: &AnkaConfig,
) {
    let mut request = DrillRequest::new(level, require_date(from), require_date(to), require_planet(planet));
    if let Some(p) = parent {
        request = request.with_parent(require_planet(p));
    }
    let table = ratio_table(config);
    let rows = drill(&request, table.as_ref()).unwrap_or_else(|e| fail(e));
    let title = format!(
        "{} of {} ({} - {})",
        level.name(),
        request.planet.name(),
        format_ddmmyyyy(request.from()),
        format_ddmmyyyy(request.to())
    );
    print_rows(&title, &rows);
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Numerology { dob, name } => run_numerology(&dob, name.as_deref()),
        Commands::Maha { dob, expand } => run_maha(&dob, expand),
        Commands::Antar { dob, planet, age } => run_antar(&dob, &planet, age),
        Commands::Pratyantar {
            from,
            to,
            planet,
            parent,
        } => {
            let config = load_config(cli.config.as_ref());
            run_drill(DashaLevel::Pratyantar, &from, &to, &planet, parent.as_deref(), &config);
        }
        Commands::Dainik {
            from,
            to,
            planet,
            parent,
        } => {
            let config = load_config(cli.config.as_ref());
            run_drill(DashaLevel::Dainik, &from, &to, &planet, parent.as_deref(), &config);
        }
    }
}
