use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pgrid_grid::extractor::{Net, extract_power_grid};
use pgrid_grid::builder::build_power_grid;
use pgrid_parser::netlist::Netlist;
use pgrid_solver::{config::SolverConfig, solver::Solver};

/// Which supply rail to reconstruct a power-grid lattice for.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum GridNet {
    Vdd,
    Gnd,
}

impl From<GridNet> for Net {
    fn from(net: GridNet) -> Self {
        match net {
            GridNet::Vdd => Net::Vdd,
            GridNet::Gnd => Net::Gnd,
        }
    }
}

/// Parses an IBM-style power-grid netlist and solves its DC operating point.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file to simulate.
    #[arg(short, long)]
    input: String,

    /// Where to write the solution (one `<name> <voltage>` line per node).
    /// Defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Instead of solving, reconstruct the regular lattice for one supply
    /// net and print its dimensions and element counts.
    #[arg(long, value_enum)]
    grid: Option<GridNet>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input_path = std::path::Path::new(&args.input);
    let (netlist, comments) =
        pgrid_parser::parser::parse_circuit_description_file(input_path).unwrap_or_else(|e| {
            eprintln!("Error parsing netlist '{}': {e}", args.input);
            std::process::exit(1);
        });

    log::info!(
        "parsed {} nodes, {} components from '{}'",
        netlist.node_count(),
        netlist.arcs.len(),
        args.input
    );

    if let Some(grid_net) = args.grid {
        let desc = extract_power_grid(&netlist, &comments, grid_net.into()).unwrap_or_else(|e| {
            eprintln!("Error extracting power grid: {e}");
            std::process::exit(1);
        });
        let grid = build_power_grid(&desc);
        println!(
            "lattice: {}x{} points, x in [{}, {}], y in [{}, {}]",
            grid.points_x.len(),
            grid.points_y.len(),
            desc.grid.start_x,
            desc.grid.end_x,
            desc.grid.start_y,
            desc.grid.end_y,
        );
        println!(
            "wires: {}, loads: {}, pads: {}",
            desc.wires.len(),
            desc.loads.len(),
            desc.pads.len()
        );
        return;
    }

    let config = SolverConfig::default();
    let solver = Solver::new(netlist.clone(), config);
    let solution = solver.solve().unwrap_or_else(|e| {
        eprintln!("Error solving circuit: {e}");
        std::process::exit(1);
    });

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(std::io::BufWriter::new(
            std::fs::File::create(path).unwrap_or_else(|e| {
                eprintln!("Error creating output file '{}': {e}", path.display());
                std::process::exit(1);
            }),
        )),
        None => Box::new(std::io::stdout()),
    };

    for (node, voltage) in solution.iter() {
        let name = if node == Netlist::GROUND { "G" } else { netlist.node_name(node) };
        if let Err(e) = writeln!(writer, "{name} {voltage}") {
            eprintln!("Error writing solution: {e}");
            std::process::exit(1);
        }
    }
}
