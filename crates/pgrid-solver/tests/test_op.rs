use pgrid_parser::parser::parse_circuit_description;
use pgrid_solver::config::SolverConfig;
use pgrid_solver::solver::Solver;

fn solve(description: &str) -> pgrid_solver::solver::Solution {
    let (netlist, _) = parse_circuit_description(description).unwrap();
    let solver = Solver::new(netlist, SolverConfig::default());
    solver.solve().unwrap()
}

fn node_voltage(description: &str, node_name: &str) -> f64 {
    let (netlist, _) = parse_circuit_description(description).unwrap();
    let solver = Solver::new(netlist.clone(), SolverConfig::default());
    let solution = solver.solve().unwrap();
    let id = netlist.node_id(node_name).expect("node not found");
    solution.voltage(id)
}

#[test]
fn voltage_divider() {
    let description = "V1 in 0 6\nR1 in mid 1k\nR2 mid 0 2k\n";
    assert!((node_voltage(description, "in") - 6.0).abs() < 1e-9);
    assert!((node_voltage(description, "mid") - 4.0).abs() < 1e-9);
}

#[test]
fn two_loads_on_one_rail() {
    let description = "V1 vdd 0 1\nR1 vdd a 10\nR2 vdd b 10\nI1 a 0 10m\nI2 b 0 10m\n";
    assert!((node_voltage(description, "vdd") - 1.0).abs() < 1e-9);
    assert!((node_voltage(description, "a") - 0.9).abs() < 1e-6);
    assert!((node_voltage(description, "b") - 0.9).abs() < 1e-6);
}

#[test]
fn inductor_is_a_dc_short() {
    let description = "V1 in 0 5\nL1 in out 1m\nR1 out 0 1k\n";
    assert!((node_voltage(description, "in") - 5.0).abs() < 1e-9);
    assert!((node_voltage(description, "out") - 5.0).abs() < 1e-9);
}

#[test]
fn capacitor_is_a_dc_open() {
    // The capacitor is dropped entirely, so `out` just sees a divider
    // between R1 and the much larger R2 -- not a literal open circuit,
    // but close enough that the capacitor's absence is what's being tested.
    let description = "V1 in 0 5\nR1 in out 1k\nC1 out 0 1u\nR2 out 0 1g\n";
    assert!((node_voltage(description, "in") - 5.0).abs() < 1e-9);
    assert!((node_voltage(description, "out") - 5.0).abs() < 1e-4);
}

#[test]
fn suffix_scaling_is_applied() {
    let description = "V1 in 0 1\nR1 in out 1k\nR2 out 0 1k\n";
    assert!((node_voltage(description, "out") - 0.5).abs() < 1e-9);
}

#[test]
fn ground_is_always_zero() {
    let description = "V1 in 0 9\nR1 in 0 1k\n";
    let solution = solve(description);
    assert_eq!(solution.voltage(0), 0.0);
}

#[test]
fn superposition_of_two_sources() {
    // Classic two-source resistive network; values checked against a
    // hand-solved reference.
    let description = "V1 2 1 32\nR1 1 0 2\nR2 2 3 4\nR3 2 0 8\nV2 3 0 20\n";
    assert!((node_voltage(description, "1") - (-8.0)).abs() < 1e-3);
    assert!((node_voltage(description, "2") - 24.0).abs() < 1e-3);
    assert!((node_voltage(description, "3") - 20.0).abs() < 1e-3);
}

#[test]
fn duplicate_component_names_are_accepted() {
    let description = "R1 in mid 1k\nR1 mid 0 1k\nV1 in 0 2\n";
    assert!((node_voltage(description, "mid") - 1.0).abs() < 1e-9);
}

#[test]
fn singular_network_reports_an_error() {
    // A floating node with no path to ground -- the matrix is singular.
    let description = "R1 a b 1k\n";
    let (netlist, _) = parse_circuit_description(description).unwrap();
    let solver = Solver::new(netlist, SolverConfig::default());
    assert!(solver.solve().is_err());
}
