use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = env::var("DIRECTORY_API_BASE_URL")
            .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string());

        let http_timeout_secs = env::var("DIRECTORY_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| "DIRECTORY_HTTP_TIMEOUT_SECS must be a valid number")?;

        Ok(Self {
            api_base_url,
            http_timeout_secs,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("DIRECTORY_API_BASE_URL must not be empty".to_string());
        }

        if self.http_timeout_secs < 1 || self.http_timeout_secs > 120 {
            return Err("DIRECTORY_HTTP_TIMEOUT_SECS must be between 1 and 120".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            api_base_url: "  ".to_string(),
            http_timeout_secs: 10,
        };
        assert!(config.validate().is_err());

        let config = Config {
            api_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            http_timeout_secs: 0,
        };
        assert!(config.validate().is_err());

        let config = Config {
            api_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            http_timeout_secs: 10,
        };
        assert!(config.validate().is_ok());
    }
}
