pub struct PushServiceConfig {
    pub connection_buffer_size: usize,
}
