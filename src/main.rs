use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use booster_calc::calc::{evaluate, CalculationResult, DesignReport};
use booster_calc::input::{InputMode, InputRecord};
use booster_calc::io;
use booster_calc::model::PhysicalConstants;
use booster_calc::sweep::{self, SweepConfig, SweepPoint};

#[derive(Parser)]
#[command(author, version, about = "Staged booster delta-v estimator")]
struct Cli {
    /// Which slot values are authoritative
    #[arg(long, value_enum, default_value_t = Mode::Length)]
    mode: Mode,

    /// Sequential stage slots, three comma-separated values (m or kg)
    #[arg(long, default_value = "10,8,6", value_parser = parse_triple)]
    stages: Triple,

    /// Pop-out slots: core,booster1,booster2 (m or kg); zero means absent
    #[arg(long, default_value = "12,6,6", value_parser = parse_triple)]
    pop_out: Triple,

    /// Alternate physical constants, JSON file
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Write the full report as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Sweep three-stage length splits and report the best
    #[arg(long, default_value_t = false)]
    sweep: bool,

    /// Total tank length for the sweep, m
    #[arg(long, default_value_t = 10.0)]
    sweep_length: f64,

    /// Write sweep rows as CSV (`-` for stdout)
    #[arg(long)]
    sweep_csv: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    Length,
    Mass,
}

#[derive(Clone, Debug)]
struct Triple([f64; 3]);

/// Up to three comma-separated slot values; unparseable slots read as
/// absent tanks rather than erroring out.
fn parse_triple(s: &str) -> Result<Triple, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() > 3 {
        return Err(format!(
            "expected up to three comma-separated values, got {}",
            parts.len()
        ));
    }
    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part.trim().parse().unwrap_or(0.0);
    }
    Ok(Triple(values))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let constants = match &cli.constants {
        Some(path) => PhysicalConstants::from_path(path)
            .with_context(|| format!("loading constants from {}", path.display()))?,
        None => PhysicalConstants::default(),
    };

    let input = match cli.mode {
        Mode::Length => InputRecord::from_lengths(cli.stages.0, cli.pop_out.0),
        Mode::Mass => InputRecord::from_masses(cli.stages.0, cli.pop_out.0),
    };

    let report = evaluate(&input, &constants);
    print_report(&input, &constants, &report);

    if let Some(path) = &cli.json {
        io::write_report_file(path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
    }

    if cli.sweep {
        let config = SweepConfig {
            total_length_m: cli.sweep_length,
            ..SweepConfig::default()
        };
        let points = sweep::sweep_three_stage(&config, &constants);
        print_sweep(&config, &points);
        if let Some(path) = &cli.sweep_csv {
            io::write_sweep_file(path, &points)
                .with_context(|| format!("writing sweep to {}", path.display()))?;
        }
    }

    Ok(())
}

fn print_report(input: &InputRecord, constants: &PhysicalConstants, report: &DesignReport) {
    println!();
    println!("====================================================================");
    println!("  STAGED BOOSTER DELTA-V ESTIMATE");
    println!("====================================================================");
    println!();
    println!("  Model Constants");
    println!("  ------------------------------------------------------------------");
    println!(
        "  Isp:           {:>8.0} s     Exhaust vel:  {:>8.1} m/s",
        constants.specific_impulse_s,
        constants.exhaust_velocity()
    );
    println!(
        "  Struct frac:   {:>8.2}       Payload:      {:>8.1} lb",
        constants.structural_fraction,
        constants.payload_lb()
    );
    let unit = match input.mode {
        InputMode::Length => "m",
        InputMode::Mass => "kg",
    };
    let stages = input.stage_slots();
    let pop = input.pop_out_slots();
    println!(
        "  Stages:        {:.1}, {:.1}, {:.1} {unit}",
        stages[0], stages[1], stages[2]
    );
    println!(
        "  Pop-out:       core {:.1}, boosters {:.1} / {:.1} {unit}",
        pop[0], pop[1], pop[2]
    );
    println!();

    print_configuration("Three-Stage (sequential tanks)", &report.three_stage);
    print_configuration("Pop-Out (core + side boosters)", &report.pop_out);
}

fn print_configuration(title: &str, result: &CalculationResult) {
    println!("  {title}");
    println!("  ------------------------------------------------------------------");
    for (i, (dv, mf)) in result
        .stage_delta_vs
        .iter()
        .zip(&result.mass_fractions)
        .enumerate()
    {
        println!(
            "  Burn {}:   dv = {:>8.1} m/s    m0/mf = {:>7.3}",
            i + 1,
            dv,
            mf
        );
    }
    if result.is_feasible() {
        println!("  TOTAL:    dv = {:>8.1} m/s", result.total_delta_v);
    } else {
        println!("  INFEASIBLE: a burn cannot lift its dry mass; delta-v zeroed");
    }
    println!();
}

fn print_sweep(config: &SweepConfig, points: &[SweepPoint]) {
    println!(
        "  Length Sweep ({} splits of {:.1} m)",
        points.len(),
        config.total_length_m
    );
    println!("  ------------------------------------------------------------------");
    for point in sweep::top_n(points, 5) {
        println!(
            "  [{:>4.1}, {:>4.1}, {:>4.1}] m   dv = {:>8.1} m/s",
            point.lengths_m[0],
            point.lengths_m[1],
            point.lengths_m[2],
            point.result.total_delta_v
        );
    }
    println!();
}
