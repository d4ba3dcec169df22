use synkr_core::bootstrap::{SAMPLE_CREDENTIAL, SAMPLE_EMAIL};

pub struct Config {
    pub log_format: String,
    pub seed_sample_data: bool,
    pub email: String,
    pub credential: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let log_format = std::env::var("SYNKR_LOG_FORMAT").unwrap_or_else(|_| "text".into());
        let seed_sample_data = std::env::var("SYNKR_SEED_SAMPLE_DATA")
            .ok()
            .and_then(|value| parse_flag(&value))
            .unwrap_or(true);
        let email = std::env::var("SYNKR_EMAIL").unwrap_or_else(|_| SAMPLE_EMAIL.into());
        let credential =
            std::env::var("SYNKR_CREDENTIAL").unwrap_or_else(|_| SAMPLE_CREDENTIAL.into());
        Self {
            log_format,
            seed_sample_data,
            email,
            credential,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

/// Reads a boolean env value; anything unrecognised falls back to the default.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
    }

    #[test]
    fn test_parse_flag_rejects_unknown_values() {
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_json_logs_is_case_insensitive() {
        let config = Config {
            log_format: "JSON".to_string(),
            seed_sample_data: true,
            email: SAMPLE_EMAIL.to_string(),
            credential: SAMPLE_CREDENTIAL.to_string(),
        };
        assert!(config.json_logs());
    }
}
