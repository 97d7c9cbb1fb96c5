use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The two categories of masses in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassKind {
    #[serde(rename = "fim_de_semana")]
    Weekend,
    #[serde(rename = "missa_diaria")]
    Daily,
}

impl MassKind {
    /// Wire name, as emitted in the roster and the CSV export.
    pub fn as_str(self) -> &'static str {
        match self {
            MassKind::Weekend => "fim_de_semana",
            MassKind::Daily => "missa_diaria",
        }
    }
}

/// A recurring mass requiring a fixed number of ministers.
///
/// Masses are catalog-defined and read-only for the run. Weekend masses
/// carry an hour token ("17h"); daily masses do not.
#[derive(Debug, Clone, Deserialize)]
pub struct Mass {
    pub id: u32,
    pub description: String,
    pub kind: MassKind,
    #[serde(deserialize_with = "deserialize_weekday")]
    pub weekday: Weekday,
    #[serde(default)]
    pub hour: Option<String>,
    pub required_ministers: usize,
}

fn deserialize_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse::<Weekday>()
        .map_err(|_| serde::de::Error::custom(format!("unknown weekday: {}", name)))
}

/// One committed roster entry. Field names follow the legacy wire format.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    #[serde(rename = "missa")]
    pub mass: String,
    #[serde(rename = "tipo")]
    pub kind: MassKind,
    #[serde(rename = "ministro")]
    pub minister: String,
    #[serde(rename = "ministro_id")]
    pub minister_id: String,
    #[serde(rename = "preferido")]
    pub preferred: bool,
    #[serde(rename = "atribuicoes_totais")]
    pub total_assignments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_kind_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&MassKind::Weekend).unwrap(),
            r#""fim_de_semana""#
        );
        assert_eq!(
            serde_json::to_string(&MassKind::Daily).unwrap(),
            r#""missa_diaria""#
        );
    }

    #[test]
    fn assignment_uses_legacy_field_names() {
        let assignment = Assignment {
            mass: "Domingo 10h".to_string(),
            kind: MassKind::Weekend,
            minister: "Ana".to_string(),
            minister_id: "u1".to_string(),
            preferred: true,
            total_assignments: 2,
        };
        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json["missa"], "Domingo 10h");
        assert_eq!(json["tipo"], "fim_de_semana");
        assert_eq!(json["ministro"], "Ana");
        assert_eq!(json["ministro_id"], "u1");
        assert_eq!(json["preferido"], true);
        assert_eq!(json["atribuicoes_totais"], 2);
    }

    #[test]
    fn mass_deserializes_weekday_names() {
        let mass: Mass = serde_json::from_str(
            r#"{
                "id": 1,
                "description": "Sábado 17h",
                "kind": "fim_de_semana",
                "weekday": "saturday",
                "hour": "17h",
                "required_ministers": 4
            }"#,
        )
        .unwrap();
        assert_eq!(mass.weekday, Weekday::Sat);
        assert_eq!(mass.hour.as_deref(), Some("17h"));
    }

    #[test]
    fn unknown_weekday_is_rejected() {
        let result = serde_json::from_str::<Mass>(
            r#"{
                "id": 1,
                "description": "x",
                "kind": "missa_diaria",
                "weekday": "someday",
                "required_ministers": 1
            }"#,
        );
        assert!(result.is_err());
    }
}
