//! Shutdown signal handling
//!
//! SIGINT and SIGTERM on Unix, Ctrl+C elsewhere. Each signal is turned into a
//! [`CoreEvent::Shutdown`] on the event loop's channel.

use colored::Colorize;
use tokio::sync::mpsc::UnboundedSender;

use crate::application::CoreEvent;

/// Start listening for shutdown signals.
pub fn spawn_shutdown_listener(events: UnboundedSender<CoreEvent>) -> Result<(), std::io::Error> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;
        let tx_term = events.clone();
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx_term.send(CoreEvent::Shutdown);
        });
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = events.send(CoreEvent::Shutdown);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn listener_installs() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_shutdown_listener(tx).unwrap();
        assert!(rx.try_recv().is_err());
    }
}
