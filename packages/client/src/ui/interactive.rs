//! Interactive chat session.
//!
//! Lines are read with rustyline on a dedicated thread and forwarded over a
//! channel to the session loop, which posts them. The poller runs on its own
//! task so the view keeps updating while a post or rename is in flight.

use std::{
    io::{self, Write},
    sync::Arc,
    thread,
};

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::ChatApi,
    usecase::{MessagePoller, MessageSink, PostMessageUseCase, UpdateRoomNameUseCase},
};

use super::{config::ClientConfig, error::ClientError, view::TailView};

const PROMPT: &str = "> ";

const HELP: &str = "\
Type a message and press Enter to post it.
  /name <NEW NAME>  rename the room
  /help             show this help
  /quit             leave the chat
  //text            post a message that starts with /";

/// A parsed line of chat input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Post(String),
    RenameRoom(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse one line typed in the chat.
///
/// A leading `//` posts the rest of the line starting with a single `/`.
pub fn parse_input(line: &str) -> ChatCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ChatCommand::Empty;
    }
    let Some(command) = trimmed.strip_prefix('/') else {
        return ChatCommand::Post(line.trim_end_matches(['\r', '\n']).to_string());
    };
    if command.starts_with('/') {
        return ChatCommand::Post(command.to_string());
    }

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command, ""));

    match name {
        "quit" | "exit" => ChatCommand::Quit,
        "help" => ChatCommand::Help,
        "name" => ChatCommand::RenameRoom(rest.to_string()),
        other => ChatCommand::Unknown(other.to_string()),
    }
}

/// Input delivered to the session loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Closed,
    Failed(String),
}

/// Read lines until EOF, Ctrl-C or `/quit`.
///
/// Runs on a plain thread: a blocking readline would otherwise hold the
/// runtime open at shutdown.
fn spawn_reader(tx: mpsc::UnboundedSender<InputEvent>) {
    thread::spawn(move || {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                let _ = tx.send(InputEvent::Failed(e.to_string()));
                return;
            }
        };

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    let quit = parse_input(&line) == ChatCommand::Quit;
                    if tx.send(InputEvent::Line(line)).is_err() || quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    let _ = tx.send(InputEvent::Closed);
                    break;
                }
                Err(e) => {
                    let _ = tx.send(InputEvent::Failed(e.to_string()));
                    break;
                }
            }
        }
    });
}

/// Aborts the polling task when the session ends, early returns included.
struct PollingTask(JoinHandle<()>);

impl Drop for PollingTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Run the interactive chat on the terminal until the user leaves.
pub async fn run_chat(api: Arc<dyn ChatApi>, config: &ClientConfig) -> Result<(), ClientError> {
    let view = Arc::new(TailView::new(io::stdout()));
    println!("Joined room {}. Type /help for commands.", config.room_id);

    let (tx, rx) = mpsc::unbounded_channel();
    spawn_reader(tx);

    run_session(api, config, view, rx).await
}

/// Chat session loop: poll the room and act on each input line until
/// `/quit`, a closed input or a closed channel.
pub async fn run_session<W: Write + Send + 'static>(
    api: Arc<dyn ChatApi>,
    config: &ClientConfig,
    view: Arc<TailView<W>>,
    mut input: mpsc::UnboundedReceiver<InputEvent>,
) -> Result<(), ClientError> {
    let room_id = config.room_id;
    let sink: Arc<dyn MessageSink> = view.clone();
    let poller =
        MessagePoller::new(api.clone(), sink.clone(), room_id).with_interval(config.poll_interval);

    poller.refresh().await;
    let _polling = PollingTask(tokio::spawn(async move { poller.run().await }));

    let post = PostMessageUseCase::new(api.clone());
    let rename = UpdateRoomNameUseCase::new(api);

    while let Some(event) = input.recv().await {
        let line = match event {
            InputEvent::Line(line) => line,
            InputEvent::Failed(e) => return Err(ClientError::Readline(e)),
            InputEvent::Closed => break,
        };

        match parse_input(&line) {
            ChatCommand::Post(text) => match post.execute(room_id, text).await {
                Ok(Some(messages)) => sink.render(&messages),
                Ok(None) => {}
                Err(e) => tracing::error!("Error posting message: {}", e),
            },
            ChatCommand::RenameRoom(name) => match rename.execute(room_id, name.clone()).await {
                Ok(()) => tracing::info!("Room {} renamed to '{}'", room_id, name),
                Err(e) => tracing::error!("Error updating room name: {}", e),
            },
            ChatCommand::Help => println!("{HELP}"),
            ChatCommand::Quit => break,
            ChatCommand::Empty => {}
            ChatCommand::Unknown(name) => {
                println!("Unknown command '/{name}'. Type /help for commands.")
            }
        }
    }

    tracing::info!("Left room {} after {} messages", room_id, view.rendered());
    Ok(())
}
