//! Headless mode execution

use super::{
    SessionData,
    messages::{
        print_poller_stopped, print_session_exit_success, print_session_shutdown,
        print_session_starting,
    },
};
use crate::display::{ConsoleSurface, render_snapshot};
use std::error::Error;
use std::io;

/// Prints every snapshot and notable event to stdout until Ctrl+C
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.server_url, session.poll_interval);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();

    loop {
        tokio::select! {
            // A requested shutdown also closes the event channel; report it as such
            biased;
            _ = shutdown_receiver.recv() => {
                break;
            }
            event = session.event_receiver.recv() => {
                let Some(mut event) = event else {
                    print_poller_stopped();
                    break;
                };
                match event.snapshot.take() {
                    Some(snapshot) => {
                        println!("--- {} ---", event.timestamp);
                        let mut surface = ConsoleSurface::new(io::stdout());
                        render_snapshot(&snapshot, &mut surface);
                        surface.finish()?;
                    }
                    None if event.should_display() => println!("{}", event),
                    None => {}
                }
            }
        }
    }

    print_session_shutdown();
    let _ = session.join_handle.await;
    print_session_exit_success();

    Ok(())
}
