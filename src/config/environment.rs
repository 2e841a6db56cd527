//! Configuração de variáveis de ambiente
//!
//! Lê as variáveis do servidor HTTP. Somente `DATABASE_URL` é obrigatória
//! (ver `config::database`); o resto tem valor padrão.

use anyhow::{Context, Result};

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Carregar a partir das variáveis de ambiente do processo
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Carregar a partir de uma função de busca (facilita os testes)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .with_context(|| format!("PORT inválida: '{}'", value))?,
            None => defaults.port,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<tracing::Level>()
                .map_err(|_| anyhow::anyhow!("LOG_LEVEL inválido: '{}'", value))?,
            None => defaults.log_level,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: lookup("HOST").unwrap_or(defaults.host),
            cors_origins,
            log_level,
        })
    }

    /// Verificar se estamos em modo desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar se estamos em modo produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Endereço de escuta do servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = EnvironmentConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.is_development());
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }

    #[test]
    fn test_reads_values() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "production"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("CORS_ORIGINS", "https://a.com, https://b.com,"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.cors_origins, vec!["https://a.com", "https://b.com"]);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_invalid_port_is_error() {
        let result = EnvironmentConfig::from_lookup(lookup_from(&[("PORT", "abc")]));
        assert!(result.is_err());
    }
}
