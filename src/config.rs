use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub client_id: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_url: String,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            // CLI_ID is the name the original deployment used
            client_id: env::var("CLIENT_ID").or_else(|_| env::var("CLI_ID"))?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            api_url: env::var("API_URL")
                .unwrap_or_else(|_| "https://api.unsplash.com".to_string()),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
