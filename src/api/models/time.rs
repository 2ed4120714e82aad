use chrono::Utc;
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt::{self, Display, Formatter};

/// Seconds since the Unix epoch, as exchanged with the registrar.
///
/// The registrar uses zero to mean "unset", and is not consistent about
/// whether it sends numbers or numeric strings, so both are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EpochTime(pub i64);

impl EpochTime {
    /// The "unset" sentinel
    pub const UNSET: Self = Self(0);

    /// Current wall clock time
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Whether this is the zero sentinel
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Raw seconds
    pub fn seconds(&self) -> i64 {
        self.0
    }
}

impl From<i64> for EpochTime {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for EpochTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for EpochTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochTimeVisitor)
    }
}

struct EpochTimeVisitor;

impl<'de> Visitor<'de> for EpochTimeVisitor {
    type Value = EpochTime;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds as a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EpochTime(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(EpochTime)
            .map_err(|_| E::custom(format!("epoch seconds out of range: {v}")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(EpochTime(v.trunc() as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let v = v.trim();
        if v.is_empty() {
            return Ok(EpochTime::UNSET);
        }
        if let Ok(seconds) = v.parse::<i64>() {
            return Ok(EpochTime(seconds));
        }
        v.parse::<f64>()
            .map(|seconds| EpochTime(seconds.trunc() as i64))
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EpochTime::UNSET)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(EpochTime::UNSET)
    }
}

#[cfg(test)]
mod test {
    use super::EpochTime;

    #[test]
    fn accepts_numbers_and_strings() {
        let values: Vec<EpochTime> =
            serde_json::from_str(r#"[1686755715, "1686755715", "0", 0, 1686755715.25, ""]"#)
                .unwrap();
        assert_eq!(
            values,
            vec![
                EpochTime(1686755715),
                EpochTime(1686755715),
                EpochTime::UNSET,
                EpochTime::UNSET,
                EpochTime(1686755715),
                EpochTime::UNSET,
            ]
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<EpochTime>(r#""yesterday""#).is_err());
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&EpochTime(42)).unwrap(), "42");
    }
}
