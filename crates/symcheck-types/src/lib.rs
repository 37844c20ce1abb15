//! Validated value types shared across the SymCheck crates.

/// Errors that can occur when creating validated symptom types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Symptom cannot be empty")]
    Empty,
}

/// Normalises a symptom string for comparison: trims surrounding whitespace and lowercases.
///
/// This never fails; an empty or whitespace-only input normalises to an empty string, which
/// simply cannot match anything.
pub fn normalise(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A symptom tag that is guaranteed to be normalised and non-empty.
///
/// The input is trimmed and lowercased during construction, so two tags that differ only in
/// case or surrounding whitespace compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymptomTag(String);

impl SymptomTag {
    /// Creates a new `SymptomTag` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(SymptomTag)` if the normalised input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let normalised = normalise(input.as_ref());
        if normalised.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(normalised))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SymptomTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SymptomTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for SymptomTag {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for SymptomTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SymptomTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SymptomTag::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalise_trims_and_lowercases() {
        assert_eq!(normalise("  Sore Throat\t"), "sore throat");
        assert_eq!(normalise("   "), "");
    }

    #[test]
    fn new_normalises_input() {
        let tag = SymptomTag::new(" Fever ").expect("valid tag");
        assert_eq!(tag.as_str(), "fever");
        assert_eq!(tag, SymptomTag::new("FEVER").expect("valid tag"));
    }

    #[test]
    fn new_rejects_blank_input() {
        assert_eq!(SymptomTag::new(""), Err(TextError::Empty));
        assert_eq!(SymptomTag::new(" \n "), Err(TextError::Empty));
    }

    #[test]
    fn deserialize_rejects_blank_and_normalises() {
        let tag: SymptomTag = serde_json::from_str("\" Runny Nose \"").expect("deserialize tag");
        assert_eq!(tag.as_str(), "runny nose");

        let err = serde_json::from_str::<SymptomTag>("\"  \"").expect_err("blank should fail");
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn serialize_writes_plain_string() {
        let tag = SymptomTag::new("Cough").expect("valid tag");
        let json = serde_json::to_string(&tag).expect("serialize tag");
        assert_eq!(json, "\"cough\"");
    }
}
