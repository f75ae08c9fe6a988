use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so loading never fails.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            output_dir: env_or("OUTPUT_DIR", "output").into(),
            templates_dir: env_or("TEMPLATES_DIR", "templates").into(),
            rust_log: env_or("RUST_LOG", "info"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_unset() {
        std::env::remove_var("OUTPUT_DIR");
        std::env::remove_var("TEMPLATES_DIR");
        let config = Config::from_env();
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
    }
}
