//! Runs long lived operations until they finish or the process is asked to
//! stop.
//!
//! The operation receives a child [`Context`] that is cancelled when the parent
//! is cancelled or a termination signal arrives. A signal is not an error: the
//! operation sees its context cancelled and returns whatever it decides to.
//! Before returning, the runner always cancels the child context and joins the
//! watcher task, so neither the context nor the signal streams outlive the
//! call. The child context is also cancelled when the operation panics.
//!
//! tokio never unregisters an OS signal handler. Once [`run_for_signal`] has
//! run, SIGINT, SIGTERM and SIGHUP no longer have their default effect for the
//! rest of the process; later signals are simply dropped.

use std::future::Future;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::context::Context;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to register {signal} handler: {source}")]
    SignalRegistration {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Runs `op` until it completes, cancelling its context on SIGINT, SIGTERM or
/// SIGHUP (Ctrl-C elsewhere) or when `ctx` is cancelled.
pub async fn run_for_signal<T, F, Fut>(ctx: &Context, op: F) -> anyhow::Result<T>
where
    F: FnOnce(Context) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let shutdown = termination_signal()?;
    run_until(ctx, shutdown, op).await
}

/// [`run_for_signal`] with a caller supplied shutdown trigger.
pub async fn run_until<T, F, Fut, S>(ctx: &Context, shutdown: S, op: F) -> anyhow::Result<T>
where
    F: FnOnce(Context) -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
    S: Future<Output = ()> + Send + 'static,
{
    let parent = ctx.cancellation().clone();
    let child = ctx.with_cancel();
    let token = child.cancellation().clone();

    let watcher = tokio::spawn(async move {
        tokio::select! {
            _ = parent.cancelled() => debug!("parent context cancelled"),
            _ = shutdown => info!("shutdown requested, cancelling operation"),
            _ = token.cancelled() => debug!("operation finished"),
        }
        token.cancel();
    });

    // cancels on unwind too, letting the watcher exit
    let guard = child.cancellation().clone().drop_guard();
    let result = op(child.clone()).await;
    drop(guard);

    if let Err(err) = watcher.await {
        warn!("signal watcher did not stop cleanly: {err}");
    }

    result
}

/// Registers the listeners right away so a signal raised after this returns
/// is never missed.
#[cfg(unix)]
pub fn termination_signal() -> Result<impl Future<Output = ()> + Send + 'static, RunnerError> {
    use tokio::signal::unix::{signal, SignalKind};

    let register = |kind: SignalKind, name: &'static str| {
        signal(kind).map_err(|source| RunnerError::SignalRegistration {
            signal: name,
            source,
        })
    };

    let mut interrupt = register(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = register(SignalKind::terminate(), "SIGTERM")?;
    let mut hangup = register(SignalKind::hangup(), "SIGHUP")?;

    Ok(async move {
        tokio::select! {
            _ = interrupt.recv() => info!("received SIGINT"),
            _ = terminate.recv() => info!("received SIGTERM"),
            _ = hangup.recv() => info!("received SIGHUP"),
        }
    })
}

#[cfg(not(unix))]
pub fn termination_signal() -> Result<impl Future<Output = ()> + Send + 'static, RunnerError> {
    Ok(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl-C"),
            Err(err) => {
                warn!("failed to listen for Ctrl-C: {err}");
                std::future::pending::<()>().await
            }
        }
    })
}
