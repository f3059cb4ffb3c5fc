use anyhow::Result;
use dotenvy::dotenv;
use std::collections::HashSet;
use std::env;

/// Built-in partner table, matching the credentials partners integrate
/// against in non-production environments. Overridable via `PARTNERS`.
const DEFAULT_PARTNERS: &str = "FAKEGOOGLE:FAKEPASSWORD1234,FAKEPEOPLE:FAKEPASSWORD4578";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub partners: Vec<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env file if present

        let partners =
            parse_partners(&env::var("PARTNERS").unwrap_or_else(|_| DEFAULT_PARTNERS.to_string()))?;

        Ok(Config {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            partners,
        })
    }
}

/// Parses `PARTNERS` as comma-separated `key:secret` pairs. Secrets may
/// contain `:`; only the first one splits. Keys must be unique.
fn parse_partners(raw: &str) -> Result<Vec<(String, String)>> {
    let mut partners = Vec::new();
    let mut seen = HashSet::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (key, secret) = entry
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("PARTNERS entry '{entry}' must be key:secret"))?;

        if key.is_empty() || secret.is_empty() {
            anyhow::bail!("PARTNERS entry '{entry}' has an empty key or secret");
        }
        if !seen.insert(key.to_string()) {
            anyhow::bail!("PARTNERS declares partner '{key}' more than once");
        }

        partners.push((key.to_string(), secret.to_string()));
    }

    if partners.is_empty() {
        anyhow::bail!("PARTNERS must declare at least one key:secret pair");
    }

    Ok(partners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_table() {
        let partners = parse_partners(DEFAULT_PARTNERS).unwrap();
        assert_eq!(partners.len(), 2);
        assert_eq!(partners[0].0, "FAKEGOOGLE");
        assert_eq!(partners[0].1, "FAKEPASSWORD1234");
    }

    #[test]
    fn tolerates_whitespace_around_entries() {
        let partners = parse_partners(" A:1 , B:2 ").unwrap();
        assert_eq!(partners.len(), 2);
        assert_eq!(partners[1], ("B".to_string(), "2".to_string()));
    }

    #[test]
    fn secret_may_contain_colons() {
        let partners = parse_partners("A:se:cr:et").unwrap();
        assert_eq!(partners[0].1, "se:cr:et");
    }

    #[test]
    fn rejects_entry_without_separator() {
        assert!(parse_partners("JUSTAKEY").is_err());
    }

    #[test]
    fn rejects_empty_key_or_secret() {
        assert!(parse_partners(":secret").is_err());
        assert!(parse_partners("key:").is_err());
    }

    #[test]
    fn rejects_duplicate_keys() {
        assert!(parse_partners("A:1,A:2").is_err());
    }

    #[test]
    fn rejects_empty_table() {
        assert!(parse_partners("").is_err());
        assert!(parse_partners(" , ").is_err());
    }
}
