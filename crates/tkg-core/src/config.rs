//! Connection settings read from a plain `KEY=VALUE` file.

use std::path::Path;

use crate::error::{TkgError, TkgResult};

/// Connection settings for the graph database.
#[derive(Debug, Clone)]
pub struct Settings {
    pub uri: String,
    pub username: String,
    pub password: String,
}

impl Settings {
    /// Read settings from a `KEY=VALUE` text file.
    ///
    /// Required keys: `URI`, `USERNAME`, `PASSWORD`. Lines without an `=`
    /// are ignored; keys and values are trimmed. A missing key fails here,
    /// before any database connection is attempted.
    pub fn from_file(path: impl AsRef<Path>) -> TkgResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    /// Parse settings from file contents.
    pub fn parse(contents: &str) -> TkgResult<Self> {
        let mut uri = None;
        let mut username = None;
        let mut password = None;

        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim() {
                "URI" => uri = Some(value),
                "USERNAME" => username = Some(value),
                "PASSWORD" => password = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            uri: uri.ok_or_else(|| TkgError::config("missing key 'URI'"))?,
            username: username.ok_or_else(|| TkgError::config("missing key 'USERNAME'"))?,
            password: password.ok_or_else(|| TkgError::config("missing key 'PASSWORD'"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let settings = Settings::parse(
            "URI=bolt://localhost:7687\nUSERNAME=neo4j\nPASSWORD=secret\n",
        )
        .unwrap();
        assert_eq!(settings.uri, "bolt://localhost:7687");
        assert_eq!(settings.username, "neo4j");
        assert_eq!(settings.password, "secret");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let settings =
            Settings::parse(" URI = bolt://db:7687 \nUSERNAME= admin\nPASSWORD =pw\n").unwrap();
        assert_eq!(settings.uri, "bolt://db:7687");
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password, "pw");
    }

    #[test]
    fn test_parse_ignores_junk_lines() {
        let settings = Settings::parse(
            "# connection\n\nURI=bolt://localhost:7687\nnot a pair\nUSERNAME=neo4j\nPASSWORD=pw",
        )
        .unwrap();
        assert_eq!(settings.username, "neo4j");
    }

    #[test]
    fn test_parse_missing_key_fails() {
        let err = Settings::parse("URI=bolt://localhost:7687\nUSERNAME=neo4j\n").unwrap_err();
        assert!(err.to_string().contains("PASSWORD"));
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let settings =
            Settings::parse("URI=bolt://h:7687\nUSERNAME=u\nPASSWORD=a=b=c").unwrap();
        assert_eq!(settings.password, "a=b=c");
    }
}
