//! Command dispatch for the CLI client.

use std::{
    io::{self, Write},
    sync::Arc,
};

use crate::{
    domain::ChatApi,
    infrastructure::HttpChatApi,
    usecase::{
        FetchMessagesUseCase, MessagePoller, PostMessageUseCase, UpdatePasswordUseCase,
        UpdateRoomNameUseCase, UpdateUsernameUseCase, UseCaseError,
    },
};

use super::{
    config::{Cli, ClientConfig, Command},
    error::ClientError,
    formatter::format_messages,
    interactive::run_chat,
    view::RedrawView,
};

/// Run the client for the parsed command line.
pub async fn run_client(cli: Cli) -> Result<(), ClientError> {
    let config = ClientConfig::from_cli(&cli)?;
    let api: Arc<dyn ChatApi> = Arc::new(HttpChatApi::new(
        &config.base_url,
        &config.api_key,
        config.request_timeout,
    )?);
    tracing::debug!(
        "Using chat API at {} for room {}",
        config.base_url,
        config.room_id
    );

    run_command(api, &config, cli.command).await
}

/// Run a single command against an already constructed API.
pub async fn run_command(
    api: Arc<dyn ChatApi>,
    config: &ClientConfig,
    command: Command,
) -> Result<(), ClientError> {
    let room_id = config.room_id;

    match command {
        Command::Messages => {
            let messages = FetchMessagesUseCase::new(api)
                .execute(room_id)
                .await
                .map_err(|e| report("fetching messages", e))?;
            print_messages(&format_messages(&messages))?;
        }
        Command::Post { text } => {
            let refreshed = PostMessageUseCase::new(api)
                .execute(room_id, text)
                .await
                .map_err(|e| report("posting message", e))?;
            if let Some(messages) = refreshed {
                print_messages(&format_messages(&messages))?;
            }
        }
        Command::Watch => watch(api, config).await?,
        Command::Chat => run_chat(api, config).await?,
        Command::RenameRoom { name } => {
            UpdateRoomNameUseCase::new(api)
                .execute(room_id, name.clone())
                .await
                .map_err(|e| report("updating room name", e))?;
            tracing::info!("Room {} renamed to '{}'", room_id, name);
        }
        Command::SetUsername { name } => {
            UpdateUsernameUseCase::new(api)
                .execute(name.clone())
                .await
                .map_err(|e| report("updating username", e))?;
            tracing::info!("Username changed to '{}'", name);
        }
        Command::SetPassword { password } => {
            UpdatePasswordUseCase::new(api)
                .execute(password)
                .await
                .map_err(|e| report("updating password", e))?;
            tracing::info!("Password changed");
        }
    }

    Ok(())
}

/// Log a failed command the way every operation reports errors, and wrap it.
fn report(operation: &'static str, error: UseCaseError) -> ClientError {
    tracing::error!("Error {}: {}", operation, error);
    ClientError::CommandFailed {
        operation,
        source: error,
    }
}

fn print_messages(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}

/// Poll the room and redraw until Ctrl-C.
async fn watch(api: Arc<dyn ChatApi>, config: &ClientConfig) -> Result<(), ClientError> {
    let view = Arc::new(RedrawView::new(io::stdout(), config.room_id));
    run_watch(api, config, view, tokio::signal::ctrl_c()).await
}

/// Poll the room into `view` until `stop` resolves.
pub async fn run_watch<W, F>(
    api: Arc<dyn ChatApi>,
    config: &ClientConfig,
    view: Arc<RedrawView<W>>,
    stop: F,
) -> Result<(), ClientError>
where
    W: Write + Send + 'static,
    F: Future<Output = io::Result<()>>,
{
    let poller = MessagePoller::new(api, view, config.room_id).with_interval(config.poll_interval);

    poller.refresh().await;

    tokio::select! {
        _ = poller.run() => {}
        result = stop => {
            result?;
            tracing::info!("Stopped watching room {}", config.room_id);
        }
    }

    Ok(())
}
