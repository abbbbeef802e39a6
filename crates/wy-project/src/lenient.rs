//! Numbers that may arrive as JSON/YAML strings (`"7.5"`).

use serde::Deserialize;
use serde::de::{self, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrText::Number(v) => Ok(v),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a number, got '{s}'"))),
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrText::deserialize(deserializer)?.into_f64()
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<NumberOrText>::deserialize(deserializer)?
            .map(NumberOrText::into_f64)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "super::deserialize")]
        value: f64,
        #[serde(default, deserialize_with = "super::option::deserialize")]
        maybe: Option<f64>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Sample = serde_json::from_str(r#"{"value": 2}"#).unwrap();
        assert_eq!(p.value, 2.0);
        assert_eq!(p.maybe, None);

        let p: Sample = serde_json::from_str(r#"{"value": " 7.5 ", "maybe": "0.03"}"#).unwrap();
        assert_eq!(p.value, 7.5);
        assert_eq!(p.maybe, Some(0.03));
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = serde_json::from_str::<Sample>(r#"{"value": "windy"}"#)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("windy"));
    }

    #[test]
    fn yaml_strings_parse() {
        let p: Sample = serde_yaml::from_str("value: '12'\nmaybe: 3\n").unwrap();
        assert_eq!(p.value, 12.0);
        assert_eq!(p.maybe, Some(3.0));
    }
}
