use serde::{Deserialize, Serialize};

/// One day's journal record.
///
/// Persisted as `{"profit": number | "", "notes": string, "photo"?: string}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// `None` is "no figure entered", which is not the same as a flat day (`Some(0.0)`).
    #[serde(with = "profit_field", default)]
    pub profit: Option<f64>,
    #[serde(default)]
    pub notes: String,
    /// Self-contained `data:` URL of the attached image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Entry {
    /// Normalizes the raw field values of the entry form.
    ///
    /// - `raw_profit`: blank or non-numeric text becomes an absent profit, never zero.
    /// - `raw_notes`: stored untouched.
    /// - `raw_photo`: an empty payload counts as no photo.
    pub fn from_raw(raw_profit: &str, raw_notes: &str, raw_photo: Option<String>) -> Self {
        Self {
            profit: parse_profit(raw_profit),
            notes: raw_notes.to_string(),
            photo: raw_photo.filter(|p| !p.is_empty()),
        }
    }

    /// True when the entry carries nothing worth keeping and must not be persisted.
    pub fn is_empty(&self) -> bool {
        self.profit.is_none() && self.notes.trim().is_empty() && self.photo.is_none()
    }

    /// Profit as the user would type it back: `""` when absent.
    pub fn profit_text(&self) -> String {
        self.profit.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// Parses a user-typed profit. Anything that is not a finite decimal number is `None`.
pub fn parse_profit(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|p| p.is_finite())
}

mod profit_field {
    use super::parse_profit;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredProfit {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(profit: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match profit {
            Some(p) => serializer.serialize_f64(*p),
            None => serializer.serialize_str(""),
        }
    }

    /// Older files may hold `null` (a NaN that went through JSON) or numeric strings.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let stored = Option::<StoredProfit>::deserialize(deserializer)?;
        Ok(match stored {
            Some(StoredProfit::Number(p)) if p.is_finite() => Some(p),
            Some(StoredProfit::Text(text)) => parse_profit(&text),
            _ => None,
        })
    }
}
