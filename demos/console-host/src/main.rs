//! A stand-in game server that drives the bridge from stdin.
//!
//! ```text
//! join Steve              → player-joined event
//! quit Steve              → player-quit event
//! Steve verify ABC123     → command issued by Steve
//! console discordlink     → command issued by the server console
//! exit
//! ```
//!
//! The stdin loop plays the role of the host's main thread: it never
//! waits on the network. Replies are printed from the runtime's worker
//! threads as they arrive.
//!
//! Usage: `console-host [path/to/config.yml]`

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use authlink::prelude::*;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Host-side actor types
// ---------------------------------------------------------------------------

/// Strips `§x` colour codes; a terminal has no use for them.
fn plain(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

struct OnlinePlayer {
    player: PlayerRef,
}

impl MessageSink for OnlinePlayer {
    fn send_message(&self, message: &str) {
        println!("[to {}] {}", self.player.name, plain(message));
    }
}

impl Actor for OnlinePlayer {
    fn player(&self) -> PlayerRef {
        self.player.clone()
    }
}

struct Console;

impl MessageSink for Console {
    fn send_message(&self, message: &str) {
        println!("[console] {}", plain(message));
    }
}

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

fn main() -> Result<(), Box<dyn std::error::Error>> {
    authlink::logging::init();

    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "DiscordAuth/config.yml".to_string());

    let runtime = tokio::runtime::Runtime::new()?;
    let bridge = Bridge::from_settings_file(
        &settings_path,
        TokioScheduler::new(runtime.handle().clone()),
    )?;
    tracing::info!(path = %settings_path, "console host ready");

    let console: Invoker = Invoker::Console(Arc::new(Console));
    let mut online: HashMap<String, Arc<OnlinePlayer>> = HashMap::new();

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["exit"] => break,
            ["join", name] => {
                let player = Arc::new(OnlinePlayer {
                    player: PlayerRef::new(Uuid::new_v4(), *name),
                });
                bridge.on_player_join(&player.player);
                println!("{} joined ({})", name, player.player.id);
                online.insert(name.to_string(), player);
            }
            ["quit", name] => match online.remove(*name) {
                Some(player) => {
                    bridge.on_player_quit(&player.player);
                    println!("{name} left");
                }
                None => println!("{name} is not online"),
            },
            ["console", command, args @ ..] => {
                report(bridge.on_command(&console, command, args), command);
            }
            [name, command, args @ ..] => match online.get(*name) {
                Some(player) => {
                    let invoker = Invoker::Player(player.clone());
                    report(bridge.on_command(&invoker, command, args), command);
                }
                None => println!("{name} is not online"),
            },
            _ => println!("expected: join <name> | quit <name> | <name|console> <command> [args]"),
        }
        prompt();
    }

    bridge.disable();
    // Calls still waiting on the network are dropped after this.
    runtime.shutdown_timeout(std::time::Duration::from_secs(5));
    Ok(())
}

fn report(outcome: CommandOutcome, command: &str) {
    if !outcome.is_handled() {
        println!("Unknown command: {command}");
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
