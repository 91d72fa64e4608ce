// Scripted bench run: neutralize a strong acid, crash out a precipitate,
// then heat the bench for a flame test. Prints the observation log the way
// the UI would surface it.
//
// Run with: cargo run --example guided_acid_base

use chem_lab_rust::session::{LabMode, LabSession};
use chem_lab_rust::substance::HazardLevel;
use colored::Colorize;

fn main() {
    let mut session = LabSession::with_default_bench();
    session.set_mode(LabMode::Procedure);

    println!("{}", "=== Virtual Chemistry Lab ===".bold());

    // Step 1: neutralization in the beaker
    session.start_timer();
    run(&mut session, "beaker-1", "hcl");
    run(&mut session, "beaker-1", "phenolphthalein");
    run(&mut session, "beaker-1", "naoh");
    session.advance_procedure_step();

    // Step 2: silver chloride precipitate in the flask
    run(&mut session, "flask-1", "nacl");
    run(&mut session, "flask-1", "agno3");
    session.advance_procedure_step();

    // Step 3: heat the bench, then flame-test more salt
    session.toggle_heater(true);
    while session.temperature_c() <= 55.0 {
        session.tick();
    }
    println!(
        "{}",
        format!("Bench heated to {:.0}°C", session.temperature_c()).yellow()
    );
    run(&mut session, "flask-1", "nacl");

    println!("\n{}", "Observation log:".bold());
    for (i, observation) in session.observations().iter().enumerate() {
        let line = format!("{:>3}. {}", i + 1, observation);
        if observation.starts_with("Safety warning") {
            println!("{}", line.red());
        } else if observation.starts_with("Added") || observation.starts_with("Heater") {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line.green());
        }
    }

    for container in session.containers() {
        let hazard = session.hazard_for(&container.id);
        let tag = match hazard {
            HazardLevel::High => "HIGH".red().bold(),
            HazardLevel::Medium => "MEDIUM".yellow(),
            HazardLevel::Low => "LOW".green(),
        };
        println!(
            "{} {} -> hazard {}",
            container.kind.as_str(),
            container.id,
            tag
        );
    }

    println!("\n{}", session.export_report());

    session.teardown();
}

fn run(session: &mut LabSession, container_id: &str, substance_id: &str) {
    if let Err(e) = session.add_substance(container_id, substance_id) {
        eprintln!("{}", e.red());
    }
}
