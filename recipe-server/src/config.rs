use recipe_config::{EnvSource, ProcessEnv};

pub const HOST_VAR: &str = "RECIPE_SERVER_HOST";
pub const PORT_VAR: &str = "RECIPE_SERVER_PORT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(ProcessEnv)
    }

    /// Read host and port, falling back to the defaults for anything absent
    /// or unparseable.
    pub fn from_source<S: EnvSource>(source: S) -> Self {
        let defaults = Self::default();
        let host = source.var(HOST_VAR).unwrap_or(defaults.host);
        let port = source
            .var(PORT_VAR)
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }
}
