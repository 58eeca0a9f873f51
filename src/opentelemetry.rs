use crate::config::{LoggingConfig, ServiceConfig};

use opentelemetry::trace::{TraceError, TracerProvider};
use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::{
    Resource, error::OTelSdkError, propagation::TraceContextPropagator, trace::SdkTracerProvider,
};
use opentelemetry_semantic_conventions::resource;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, filter::LevelFilter, layer::SubscriberExt};

#[derive(Error, Debug)]
pub enum OTelError {
    #[error(transparent)]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error(transparent)]
    OTelSdk(#[from] OTelSdkError),
    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Installs the global tracing subscriber: bunyan-formatted JSON on stdout
/// plus OTLP span export, filtered by the configured level.
pub fn configure(
    service_config: &ServiceConfig,
    logging_config: &LoggingConfig,
) -> Result<SdkTracerProvider, OTelError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(
            Resource::builder()
                .with_attribute(KeyValue::new(
                    resource::SERVICE_NAME,
                    service_config.name.to_owned(),
                ))
                .build(),
        )
        .build();

    let tracer = provider.tracer(service_config.name.to_owned());

    let subscriber = Registry::default()
        .with(EnvFilter::new(level_filter(&logging_config.level).to_string()))
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(
            service_config.name.to_owned(),
            std::io::stdout,
        ));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(provider)
}

pub fn shutdown(provider: SdkTracerProvider) -> Result<(), OTelError> {
    Ok(provider.shutdown()?)
}

fn level_filter(level: &str) -> LevelFilter {
    match level {
        "off" => LevelFilter::OFF,
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        _ => LevelFilter::ERROR,
    }
}
