use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use super::availability::AvailabilityIndex;
use super::types::{Assignment, Mass, MassKind};
use crate::parser::{AvailabilityResponse, Minister};

/// Builds the roster for one run: every mass in catalog order is filtered,
/// ranked and filled from a shared fairness counter.
///
/// The counter lives and dies inside this call, so the function is a pure
/// function of its inputs. Catalog order matters: each mass's ranking sees
/// the counts accumulated by the masses before it. A minister assigned to
/// one mass stays eligible for every later mass; there is no per-run cap
/// on total assignments.
pub fn generate_roster(
    catalog: &[Mass],
    ministers: &[Minister],
    responses: &[AvailabilityResponse],
) -> Vec<Assignment> {
    let index = AvailabilityIndex::new(responses);
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut roster = Vec::new();

    for mass in catalog {
        let mut candidates = eligible_candidates(mass, ministers, &index);
        debug!(
            mass = %mass.description,
            candidates = candidates.len(),
            "candidate pool built"
        );

        // Preference first for weekend masses, then the fairness counter;
        // daily masses rank on the counter alone. The sort is stable, so
        // residual ties keep input order and the run stays deterministic.
        match mass.kind {
            MassKind::Weekend => candidates.sort_by_key(|m| {
                (
                    !m.preferred_positions.contains(&mass.id),
                    counts.get(m.id.as_str()).copied().unwrap_or(0),
                )
            }),
            MassKind::Daily => {
                candidates.sort_by_key(|m| counts.get(m.id.as_str()).copied().unwrap_or(0))
            }
        }

        let selected: Vec<&Minister> = candidates
            .into_iter()
            .take(mass.required_ministers)
            .collect();
        info!(
            mass = %mass.description,
            assigned = selected.len(),
            required = mass.required_ministers,
            "mass filled"
        );

        for minister in selected {
            let count = counts.entry(minister.id.as_str()).or_insert(0);
            *count += 1;
            roster.push(Assignment {
                mass: mass.description.clone(),
                kind: mass.kind,
                minister: minister.name.clone(),
                minister_id: minister.id.clone(),
                preferred: mass.kind == MassKind::Weekend
                    && minister.preferred_positions.contains(&mass.id),
                total_assignments: *count,
            });
        }
    }

    roster
}

/// Candidate pool for one mass: ministers passing the category-appropriate
/// availability predicate, minus those avoiding it (weekend masses only),
/// deduplicated by id keeping the first occurrence.
fn eligible_candidates<'a>(
    mass: &Mass,
    ministers: &'a [Minister],
    index: &AvailabilityIndex<'_>,
) -> Vec<&'a Minister> {
    let mut seen = HashSet::new();
    ministers
        .iter()
        .filter(|m| match mass.kind {
            MassKind::Weekend => {
                index.is_available_for_weekend(&m.id, mass)
                    && !m.avoid_positions.contains(&mass.id)
            }
            MassKind::Daily => index.is_available_for_weekday(&m.id, mass),
        })
        .filter(|m| seen.insert(m.id.as_str()))
        .collect()
}
