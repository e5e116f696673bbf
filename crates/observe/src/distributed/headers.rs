use {
    axum::http,
    opentelemetry::{global, propagation::Injector},
    tracing::Span,
    tracing_opentelemetry::OpenTelemetrySpanExt,
};

/// Writes text map propagation fields into an HTTP header map. Fields that
/// are not valid header names or values are skipped.
struct HeaderInjector<'a>(&'a mut http::HeaderMap);

impl Injector for HeaderInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let (Ok(name), Ok(value)) = (
            http::header::HeaderName::from_bytes(key.as_bytes()),
            http::header::HeaderValue::from_str(&value),
        ) {
            self.0.insert(name, value);
        }
    }
}

/// Returns the headers that carry the current span's tracing context to the
/// service handling the outbound request. The map is empty when the current
/// span has no context worth propagating.
pub fn tracing_headers() -> http::HeaderMap {
    let mut headers = http::HeaderMap::new();

    let cx = Span::current().context();
    global::get_text_map_propagator(|propagator| {
        propagator.inject_context(&cx, &mut HeaderInjector(&mut headers))
    });

    headers
}
