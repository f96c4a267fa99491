use crate::service::notifications_service::SuccessPolicy;
use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    pub push_connection_buffer_size: usize,

    pub send_success_policy: SuccessPolicy,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("RESERVA_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("RESERVA_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("RESERVA_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("RESERVA_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("RESERVA_NOTIFIER_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("RESERVA_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let push_connection_buffer_size =
            Self::env_var("RESERVA_NOTIFIER_PUSH_CONNECTION_BUFFER_SIZE")?.parse()?;
        let send_success_policy = match std::env::var("RESERVA_NOTIFIER_SEND_SUCCESS_POLICY") {
            Ok(value) => value.parse().map_err(|_| {
                anyhow!("RESERVA_NOTIFIER_SEND_SUCCESS_POLICY is not a valid policy")
            })?,
            Err(_) => SuccessPolicy::default(),
        };

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            push_connection_buffer_size,
            send_success_policy,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
