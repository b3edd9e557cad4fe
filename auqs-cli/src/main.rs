//! AUQS - state-vector quantum register simulator
//! Command-line driver: runs the SWAP demo and inspects composed gates
//!
//! ## Environment Variables
//! - `AUQS_SEED`: measurement RNG seed (default: OS entropy)
//! - `AUQS_TOLERANCE`: normalization tolerance (default: 1e-9)
//! - `AUQS_MAX_QUBITS`: largest register allowed (default: 12)
//! - `RUST_LOG`: log filter (default: `auqs=info,auqs_core=info`)

use anyhow::{Context, Result, bail};
use auqs_core::{Gate, GateMatrix, QuantumRegister, SimulatorConfig, circuits, generate_gate};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "auqs")]
#[command(author = "AUQS Contributors")]
#[command(version = "2026.1.16")]
#[command(about = "State-vector quantum register simulator", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Measurement RNG seed (overrides config and environment)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swap two qubits with three CNOTs and measure
    Swap {
        /// Initial two-qubit basis state
        #[arg(short, long, default_value = "10")]
        input: String,
    },

    /// Print the full register operator of a gate
    Gate {
        /// Catalogue name (X, Y, Z, H, Id, S, SDagger, T, TDagger, CNOT)
        #[arg(value_name = "NAME")]
        name: String,

        /// Register size
        #[arg(short = 'n', long, default_value_t = 1)]
        qubits: usize,

        /// Target qubit
        #[arg(short, long, default_value_t = 0)]
        target: usize,

        /// Control qubit (CNOT only)
        #[arg(long)]
        control: Option<usize>,

        /// Print as JSON rows of [re, im] pairs
        #[arg(long)]
        json: bool,
    },

    /// List the gate catalogue
    Gates,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auqs=info,auqs_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.seed)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Swap { input } => swap_command(&config, &input),
        Commands::Gate {
            name,
            qubits,
            target,
            control,
            json,
        } => gate_command(&config, &name, qubits, target, control, json),
        Commands::Gates => {
            gates_command(&config);
            Ok(())
        }
    }
}

/// Defaults, then file, then `AUQS_*` environment, then flags
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimulatorConfig> {
    let mut config = match path {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    config.apply_env().context("reading AUQS_* environment")?;
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

// ============================================================================
// Commands
// ============================================================================

fn swap_command(config: &SimulatorConfig, input: &str) -> Result<()> {
    let bits = parse_bits(input, 2)?;

    let mut register = QuantumRegister::with_config(2, config)?;
    for (qubit, _) in bits.iter().enumerate().filter(|(_, set)| **set) {
        register.apply_gate(Gate::X, qubit, None)?;
    }
    tracing::info!("Execute Swap Algorithm on |{}>", input);

    circuits::swap(&mut register, 0, 1)?;
    tracing::debug!("state before measurement:\n{}", register);

    let mut rng = config.rng();
    let value = register.measure(&mut rng)?;
    println!("SWAP: |{}>", value);

    Ok(())
}

fn gate_command(
    config: &SimulatorConfig,
    name: &str,
    qubits: usize,
    target: usize,
    control: Option<usize>,
    json: bool,
) -> Result<()> {
    if qubits > config.max_qubits {
        bail!("{} qubits exceeds the limit of {}", qubits, config.max_qubits);
    }

    let gate: Gate = name.parse()?;
    let (qubit1, qubit2) = match (gate.arity(), control) {
        (2, Some(control)) => (control, Some(target)),
        (2, None) => bail!("{} requires --control", gate),
        (_, Some(_)) => {
            tracing::warn!("--control ignored for single-qubit gate {}", gate);
            (target, None)
        }
        (_, None) => (target, None),
    };

    let matrix = generate_gate(gate, qubits, qubit1, qubit2)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix.rows())?);
    } else {
        println!(
            "{} on {} qubit(s), {}x{}",
            gate.to_string().cyan().bold(),
            qubits,
            matrix.dim(),
            matrix.dim()
        );
        print_matrix(&matrix);
    }

    Ok(())
}

fn gates_command(config: &SimulatorConfig) {
    println!("{}", "Gate catalogue:".bold());
    for gate in Gate::ALL {
        let matrix = match gate.arity() {
            2 => generate_gate(gate, 2, 0, Some(1)),
            _ => gate.matrix(),
        };
        let status = match matrix {
            Ok(m) if m.is_unitary(config.tolerance) => "unitary".green(),
            Ok(_) => "NOT unitary".red(),
            Err(e) => e.to_string().red(),
        };
        println!("  {:<8} {} qubit(s)  {}", gate.name().cyan(), gate.arity(), status);
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_bits(input: &str, width: usize) -> Result<Vec<bool>> {
    if input.len() != width {
        bail!("expected {} bits, got '{}'", width, input);
    }
    input
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => bail!("invalid bit '{}' in '{}'", other, input),
        })
        .collect()
}

fn print_matrix(matrix: &GateMatrix) {
    for row in matrix.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|c| format!("{:+.3}{:+.3}i", c.re, c.im))
            .collect();
        println!("  [{}]", cells.join("  "));
    }
}
