use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::Weekday;

use super::types::{Mass, MassKind};
use crate::error::{Result, ScheduleError};

/// Portuguese day name, as used by the questionnaire's daily-mass answers.
pub fn day_name_pt(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Key used by the detailed `weekdays` map of a response.
pub fn weekday_map_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// The parish's standard masses, in processing order: weekend masses
/// first, then the Monday-to-Friday daily masses. Weekend and daily
/// masses occupy disjoint id ranges.
pub fn default_catalog() -> Vec<Mass> {
    vec![
        weekend_mass(1, "Sábado 17h", Weekday::Sat, "17h", 4),
        weekend_mass(2, "Domingo 08h", Weekday::Sun, "08h", 4),
        weekend_mass(3, "Domingo 10h", Weekday::Sun, "10h", 6),
        weekend_mass(4, "Domingo 19h", Weekday::Sun, "19h", 6),
        daily_mass(5, Weekday::Mon, 5),
        daily_mass(6, Weekday::Tue, 5),
        daily_mass(7, Weekday::Wed, 5),
        daily_mass(8, Weekday::Thu, 5),
        daily_mass(9, Weekday::Fri, 5),
    ]
}

fn weekend_mass(id: u32, description: &str, weekday: Weekday, hour: &str, required: usize) -> Mass {
    Mass {
        id,
        description: description.to_string(),
        kind: MassKind::Weekend,
        weekday,
        hour: Some(hour.to_string()),
        required_ministers: required,
    }
}

fn daily_mass(id: u32, weekday: Weekday, required: usize) -> Mass {
    Mass {
        id,
        description: format!("Missa Diária - {}", day_name_pt(weekday)),
        kind: MassKind::Daily,
        weekday,
        hour: None,
        required_ministers: required,
    }
}

/// Parses a custom catalog (a JSON array of mass definitions) from any reader.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<Mass>> {
    let masses: Vec<Mass> =
        serde_json::from_reader(reader).map_err(|e| ScheduleError::InvalidCatalog(e.to_string()))?;
    validate_catalog(&masses)?;
    Ok(masses)
}

/// Loads a custom catalog from a file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Mass>> {
    parse_catalog(File::open(path)?)
}

fn validate_catalog(masses: &[Mass]) -> Result<()> {
    if masses.is_empty() {
        return Err(ScheduleError::InvalidCatalog(
            "catalog has no masses".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for mass in masses {
        if !seen.insert(mass.id) {
            return Err(ScheduleError::InvalidCatalog(format!(
                "duplicate mass id: {}",
                mass.id
            )));
        }
        if mass.required_ministers == 0 {
            return Err(ScheduleError::InvalidCatalog(format!(
                "mass {} requires zero ministers",
                mass.id
            )));
        }
        if mass.kind == MassKind::Weekend && mass.hour.is_none() {
            return Err(ScheduleError::InvalidCatalog(format!(
                "weekend mass {} is missing its hour token",
                mass.id
            )));
        }
    }
    Ok(())
}
