//! Terminal chat against a running relay: `careerlens chat [relay-url]`.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::chat::{HttpRelay, MentorSession};
use crate::models::chat::{ChatMessage, Role};

const HELP: &str = "Commands: /ask <n> sends suggestion n, /retry resends the last failed \
message, /quit exits.";

pub async fn run(relay_url: &str) -> Result<()> {
    info!("Starting mentor chat against {relay_url}");
    let session = MentorSession::new(Arc::new(HttpRelay::new(relay_url)?));

    let mut status_rx = session.subscribe();
    let indicator = tokio::spawn(async move {
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow_and_update().clone();
            if let Some(label) = status.retry_indicator() {
                println!("  ... {label}");
            }
        }
    });

    let mut shown = print_new(&session.transcript(), 0);
    for (i, question) in session.suggestions().iter().enumerate() {
        println!("  [{}] {question}", i + 1);
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let result = match line {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{HELP}");
                continue;
            }
            "/retry" => session.retry_last().await,
            _ => match line.strip_prefix("/ask ") {
                Some(n) => {
                    let picked = n
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1))
                        .and_then(|i| session.use_suggestion(i));
                    if picked.is_none() {
                        println!("  ! no such suggestion");
                        continue;
                    }
                    session.send_draft().await
                }
                None => session.send(line).await,
            },
        };

        if let Err(e) = result {
            println!("  ! {e}");
        }

        shown = print_new(&session.transcript(), shown);
        for notice in session.take_notices() {
            println!("  [{}] {}", notice.title, notice.description);
        }
        if session.can_retry() {
            if let Some(message) = session.failed_message() {
                println!("  (type /retry to resend \"{message}\")");
            }
        }
    }

    indicator.abort();
    Ok(())
}

/// Prints transcript lines from `from` onward and returns the new count.
fn print_new(transcript: &[ChatMessage], from: usize) -> usize {
    for message in transcript.iter().skip(from) {
        let who = match message.role {
            Role::User => "you",
            Role::Assistant => "mentor",
        };
        println!(
            "[{}] {who}> {}",
            message.timestamp.format("%H:%M"),
            message.content
        );
    }
    transcript.len()
}
