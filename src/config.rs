use serde::Deserialize;

use crate::LikeError;

/// Class names the like handler matches on and toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LikeConfig {
    /// Clicks are only handled when the target (or an ancestor below the root) has this class.
    pub like_class: String,
    /// When the clicked element has this class we toggle its children instead of itself.
    pub button_class: String,

    /// Marker for the liked (filled) icon.
    pub solid_class: String,
    /// Marker for the unliked icon.
    pub outline_class: String,
}

impl LikeConfig {
    pub fn from_json(value: &str) -> Result<Self, LikeError> {
        let this: Self = serde_json::from_str(value)?;

        this.validate()?;

        Ok(this)
    }

    pub fn validate(&self) -> Result<(), LikeError> {
        for (name, value) in [
            ("like_class", &self.like_class),
            ("button_class", &self.button_class),
            ("solid_class", &self.solid_class),
            ("outline_class", &self.outline_class),
        ] {
            if value.is_empty() {
                return Err(LikeError::InvalidConfig(format!("{name} is empty")));
            }

            // DOMTokenList rejects tokens with whitespace.
            if value.chars().any(char::is_whitespace) {
                return Err(LikeError::InvalidConfig(format!(
                    "{name} contains whitespace: {value:?}"
                )));
            }
        }

        if self.solid_class == self.outline_class {
            return Err(LikeError::InvalidConfig(
                "solid_class and outline_class must differ".into(),
            ));
        }

        Ok(())
    }
}

impl Default for LikeConfig {
    fn default() -> Self {
        Self {
            like_class: String::from("like-btn"),
            button_class: String::from("btn"),
            solid_class: String::from("fas"),
            outline_class: String::from("far"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(LikeConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = LikeConfig::from_json(r#"{ "like_class": "heart" }"#).unwrap();

        assert_eq!(config.like_class, "heart");
        assert_eq!(config.button_class, "btn");
        assert_eq!(config.solid_class, "fas");
        assert_eq!(config.outline_class, "far");
    }

    #[test]
    fn rejects_bad_class_names() {
        assert!(matches!(
            LikeConfig::from_json(r#"{ "solid_class": "" }"#),
            Err(LikeError::InvalidConfig(_))
        ));

        assert!(matches!(
            LikeConfig::from_json(r#"{ "like_class": "like btn" }"#),
            Err(LikeError::InvalidConfig(_))
        ));

        assert!(matches!(
            LikeConfig::from_json(r#"{ "solid_class": "far" }"#),
            Err(LikeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            LikeConfig::from_json("{ like_class"),
            Err(LikeError::ConfigParse(_))
        ));
    }
}
