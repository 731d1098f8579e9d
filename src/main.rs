// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console_operator::{
    constants::{
        CLUSTER_SINGLETON_NAME, DEFAULT_REQUEUE_SECS, OPENSHIFT_CONSOLE_CONFIG_MAP_NAME,
        OPENSHIFT_CONSOLE_NAMESPACE,
    },
    context::{Context, Stores},
    crd::{ClusterVersion, Console, Infrastructure},
    filters::include_by_name,
    reconcilers::{error_policy, reconcile_console},
};
use futures::StreamExt;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    runtime::{
        reflector::{self, ObjectRef},
        watcher, Controller, WatchStreamExt,
    },
    Api, Client,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Compact human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

/// OpenShift console operator
#[derive(Parser, Debug)]
#[command(name = "console-operator", version, about, long_about = None)]
struct Args {
    /// Log output format
    #[arg(long, env = "RUST_LOG_FORMAT", value_enum, ignore_case = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Seconds between reconciles of a healthy console
    #[arg(
        long,
        env = "CONSOLE_OPERATOR_REQUEUE_SECS",
        default_value_t = DEFAULT_REQUEUE_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    requeue_secs: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .thread_name("console-operator")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(args))
}

fn init_tracing(format: LogFormat) {
    // Respects RUST_LOG if set, otherwise defaults to INFO level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}

async fn async_main(args: Args) -> Result<()> {
    init_tracing(args.log_format);

    info!("Starting console operator");
    debug!(?args, "Logging initialized with file and line number tracking");

    debug!("Initializing Kubernetes client");
    let client = Client::try_default().await?;
    debug!("Kubernetes client initialized successfully");

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            info!("Shutdown signal received, cancelling in-flight reconciles");
            shutdown.cancel();
        }
    });

    // Reflectors for everything the reconcile reads
    let (config_maps, config_map_writer) = reflector::store::<ConfigMap>();
    let config_map_reflector = reflector::reflector(
        config_map_writer,
        watcher(
            Api::<ConfigMap>::namespaced(client.clone(), OPENSHIFT_CONSOLE_NAMESPACE),
            watcher::Config::default(),
        ),
    )
    .touched_objects()
    .default_backoff();

    let (infrastructures, infrastructure_writer) = reflector::store::<Infrastructure>();
    let infrastructure_reflector = reflector::reflector(
        infrastructure_writer,
        watcher(Api::<Infrastructure>::all(client.clone()), watcher::Config::default()),
    )
    .touched_objects()
    .default_backoff();

    let (cluster_versions, cluster_version_writer) = reflector::store::<ClusterVersion>();
    let cluster_version_reflector = reflector::reflector(
        cluster_version_writer,
        watcher(Api::<ClusterVersion>::all(client.clone()), watcher::Config::default()),
    )
    .touched_objects()
    .default_backoff();

    let controller = Controller::new(
        Api::<Console>::all(client.clone()),
        watcher::Config::default().fields(&format!("metadata.name={CLUSTER_SINGLETON_NAME}")),
    );

    let ctx = Arc::new(Context {
        stores: Stores {
            consoles: controller.store(),
            infrastructures,
            cluster_versions,
            config_maps,
        },
        shutdown: shutdown.clone(),
        requeue_after: Duration::from_secs(args.requeue_secs),
    });

    // Only changes to console-config trigger a reconcile; the rest of the namespace is ignored
    let console_config = include_by_name([OPENSHIFT_CONSOLE_CONFIG_MAP_NAME]);
    let console_controller = controller
        .watches(
            Api::<ConfigMap>::namespaced(client.clone(), OPENSHIFT_CONSOLE_NAMESPACE),
            watcher::Config::default(),
            move |cm| {
                console_config
                    .admits(&cm)
                    .then(|| ObjectRef::new(CLUSTER_SINGLETON_NAME))
            },
        )
        .shutdown_on_signal()
        .run(reconcile_console, error_policy, ctx)
        .for_each(|result| {
            match result {
                Ok((obj, _action)) => debug!(name = %obj.name, "Reconcile finished"),
                Err(e) => warn!("Console controller error: {}", e),
            }
            futures::future::ready(())
        });

    info!("Starting console controller");

    // Controllers and reflectors should never exit on their own
    tokio::select! {
        () = console_controller => {
            info!("Console controller stopped");
            Ok(())
        }
        () = config_map_reflector.for_each(|_| futures::future::ready(())) => {
            error!("CRITICAL: ConfigMap reflector exited unexpectedly");
            anyhow::bail!("ConfigMap reflector exited unexpectedly")
        }
        () = infrastructure_reflector.for_each(|_| futures::future::ready(())) => {
            error!("CRITICAL: Infrastructure reflector exited unexpectedly");
            anyhow::bail!("Infrastructure reflector exited unexpectedly")
        }
        () = cluster_version_reflector.for_each(|_| futures::future::ready(())) => {
            error!("CRITICAL: ClusterVersion reflector exited unexpectedly");
            anyhow::bail!("ClusterVersion reflector exited unexpectedly")
        }
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
