use std::path::Path;

use crate::error::Result;
use crate::schedule::{Assignment, Mass};

/// Prints a coverage report to stderr: fill rate per mass, then the
/// per-minister distribution, busiest first. stdout is reserved for the
/// roster document.
pub fn print_summary(catalog: &[Mass], roster: &[Assignment]) {
    eprintln!("\n=== Cobertura por missa ===");
    for mass in catalog {
        let assigned = roster.iter().filter(|a| a.mass == mass.description).count();
        let percentage = assigned as f64 / mass.required_ministers as f64 * 100.0;
        eprintln!(
            "  {} -> {}/{} ministros ({:.0}%)",
            mass.description, assigned, mass.required_ministers, percentage
        );
    }

    eprintln!("\n=== Distribuição por ministro ===");
    let mut totals: Vec<(&str, &str, u32)> = Vec::new();
    for assignment in roster {
        match totals.iter_mut().find(|t| t.0 == assignment.minister_id) {
            // counters are monotonic, so the last value seen is the total
            Some(entry) => entry.2 = assignment.total_assignments,
            None => totals.push((
                assignment.minister_id.as_str(),
                assignment.minister.as_str(),
                assignment.total_assignments,
            )),
        }
    }
    totals.sort_by(|a, b| b.2.cmp(&a.2));
    for (_, name, count) in &totals {
        eprintln!("  {} {} ({})", "█".repeat(*count as usize), name, count);
    }
}

/// Writes the roster as a CSV file, mirroring the JSON output columns.
pub fn write_roster_csv<P: AsRef<Path>>(path: P, roster: &[Assignment]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Missa", "Tipo", "Ministro", "Preferido", "Atribuições Totais"])?;
    for assignment in roster {
        let total = assignment.total_assignments.to_string();
        writer.write_record([
            assignment.mass.as_str(),
            assignment.kind.as_str(),
            assignment.minister.as_str(),
            if assignment.preferred { "Sim" } else { "Não" },
            total.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
