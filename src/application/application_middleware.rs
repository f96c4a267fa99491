use super::ApplicationEnv;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
    pub body_limit: RequestBodyLimitLayer,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let trace = TraceLayer::new_for_http();

    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);

    ApplicationMiddleware { trace, body_limit }
}
