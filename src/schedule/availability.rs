use std::collections::HashMap;

use super::catalog::{day_name_pt, weekday_map_key};
use super::types::Mass;
use crate::parser::AvailabilityResponse;

/// Groups questionnaire responses by minister and answers the two
/// availability questions the allocator asks.
///
/// A minister may have several responses; availability is granted if any
/// one of them grants it. Order among a minister's own responses does not
/// matter.
pub struct AvailabilityIndex<'a> {
    by_user: HashMap<&'a str, Vec<&'a AvailabilityResponse>>,
}

impl<'a> AvailabilityIndex<'a> {
    pub fn new(responses: &'a [AvailabilityResponse]) -> Self {
        let mut by_user: HashMap<&str, Vec<&AvailabilityResponse>> = HashMap::new();
        for response in responses {
            by_user
                .entry(response.user_id.as_str())
                .or_default()
                .push(response);
        }
        AvailabilityIndex { by_user }
    }

    fn responses(&self, user_id: &str) -> &[&'a AvailabilityResponse] {
        self.by_user.get(user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the minister declared availability for a weekend mass.
    ///
    /// An entry matches when it contains the mass's hour token or the
    /// second word of the mass's description as a substring. The catalog
    /// writes descriptions as "<Day> <Hour>", while older responses may
    /// carry only the bare hour, hence the dual check. Matching is
    /// substring containment, not equality: entries are free text, so
    /// "Domingo 10h às 11h" matches "10h", and "08h" also matches inside
    /// a longer token like "08h30".
    pub fn is_available_for_weekend(&self, user_id: &str, mass: &Mass) -> bool {
        let hour = mass.hour.as_deref();
        let description_hour = mass.description.split_whitespace().nth(1);
        self.responses(user_id).iter().any(|response| {
            response.available_sundays.iter().any(|entry| {
                hour.map_or(false, |h| entry.contains(h))
                    || description_hour.map_or(false, |h| entry.contains(h))
            })
        })
    }

    /// Whether the minister declared availability for a daily mass, via
    /// either the day-name list or the detailed per-day flags. Stops at
    /// the first response that grants it.
    pub fn is_available_for_weekday(&self, user_id: &str, mass: &Mass) -> bool {
        let day_name = day_name_pt(mass.weekday);
        let day_key = weekday_map_key(mass.weekday);
        self.responses(user_id).iter().any(|response| {
            response
                .daily_mass_availability
                .iter()
                .any(|day| day == day_name)
                || response.weekdays.get(day_key).copied().unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::catalog::default_catalog;
    use crate::schedule::types::MassKind;
    use chrono::Weekday;

    fn response(
        user_id: &str,
        sundays: &[&str],
        days: &[&str],
        weekdays: &[(&str, bool)],
    ) -> AvailabilityResponse {
        AvailabilityResponse {
            user_id: user_id.to_string(),
            available_sundays: sundays.iter().map(|s| s.to_string()).collect(),
            daily_mass_availability: days.iter().map(|s| s.to_string()).collect(),
            weekdays: weekdays
                .iter()
                .map(|(day, flag)| (day.to_string(), *flag))
                .collect(),
        }
    }

    fn mass_by_id(id: u32) -> Mass {
        default_catalog().into_iter().find(|m| m.id == id).unwrap()
    }

    #[test]
    fn weekend_entry_matches_by_hour_token() {
        let responses = vec![response("u1", &["Domingo 10h"], &[], &[])];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekend("u1", &mass_by_id(3)));
        assert!(!index.is_available_for_weekend("u1", &mass_by_id(2)));
        assert!(!index.is_available_for_weekend("u1", &mass_by_id(1)));
    }

    #[test]
    fn weekend_entry_matches_by_bare_hour() {
        // older responses encode only the hour substring
        let responses = vec![response("u1", &["17h"], &[], &[])];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekend("u1", &mass_by_id(1)));
    }

    #[test]
    fn weekend_entry_matches_by_description_word_when_hour_differs() {
        let mass = Mass {
            id: 1,
            description: "Sábado 17:00".to_string(),
            kind: MassKind::Weekend,
            weekday: Weekday::Sat,
            hour: Some("17h".to_string()),
            required_ministers: 4,
        };
        let responses = vec![response("u1", &["Sábado 17:00"], &[], &[])];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekend("u1", &mass));
    }

    #[test]
    fn weekend_matching_is_substring_containment() {
        // "08h" matches inside the longer token; kept loose for free-text entries
        let responses = vec![response("u1", &["Domingo 08h30"], &[], &[])];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekend("u1", &mass_by_id(2)));
    }

    #[test]
    fn any_of_multiple_responses_grants_weekend_availability() {
        let responses = vec![
            response("u1", &[], &[], &[]),
            response("u1", &["19h"], &[], &[]),
        ];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekend("u1", &mass_by_id(4)));
    }

    #[test]
    fn weekday_matches_by_localized_day_name() {
        let responses = vec![response("u1", &[], &["Segunda-feira"], &[])];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekday("u1", &mass_by_id(5)));
        assert!(!index.is_available_for_weekday("u1", &mass_by_id(6)));
    }

    #[test]
    fn weekday_matches_by_detailed_flags() {
        let responses = vec![response("u1", &[], &[], &[("friday", true)])];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekday("u1", &mass_by_id(9)));
        assert!(!index.is_available_for_weekday("u1", &mass_by_id(5)));
    }

    #[test]
    fn weekday_flag_set_false_does_not_grant() {
        let responses = vec![response("u1", &[], &[], &[("monday", false)])];
        let index = AvailabilityIndex::new(&responses);
        assert!(!index.is_available_for_weekday("u1", &mass_by_id(5)));
    }

    #[test]
    fn either_weekday_representation_grants() {
        let responses = vec![response(
            "u1",
            &[],
            &["Terça-feira"],
            &[("thursday", true)],
        )];
        let index = AvailabilityIndex::new(&responses);
        assert!(index.is_available_for_weekday("u1", &mass_by_id(6)));
        assert!(index.is_available_for_weekday("u1", &mass_by_id(8)));
        assert!(!index.is_available_for_weekday("u1", &mass_by_id(7)));
    }

    #[test]
    fn unknown_minister_is_never_available() {
        let responses = vec![response("u1", &["10h"], &["Segunda-feira"], &[])];
        let index = AvailabilityIndex::new(&responses);
        assert!(!index.is_available_for_weekend("u2", &mass_by_id(3)));
        assert!(!index.is_available_for_weekday("u2", &mass_by_id(5)));
    }

    #[test]
    fn day_name_table_covers_the_whole_week() {
        assert_eq!(day_name_pt(Weekday::Sun), "Domingo");
        assert_eq!(day_name_pt(Weekday::Sat), "Sábado");
        assert_eq!(weekday_map_key(Weekday::Wed), "wednesday");
    }
}
