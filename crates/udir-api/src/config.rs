use serde::Deserialize;

/// Deployment environment, selects logging format and HSTS
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub env: Environment,
    /// Comma-separated list, empty disables CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// When set, `/graphql` requires an `Authorization` header equal to it
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_allowed_origins() -> String {
    "http://localhost:8000".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl ApiConfig {
    /// Read the configuration from `HOST`, `PORT`, `ENV`, `ALLOWED_ORIGINS`,
    /// `AUTH_TOKEN` and `GRAPHIQL`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Self>()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            env: Environment::default(),
            allowed_origins: default_allowed_origins(),
            auth_token: None,
            graphiql: default_graphiql(),
        }
    }
}
