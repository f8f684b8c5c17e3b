//! Interactive sessions: listen and chat.

use std::thread;

use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use crate::error::ClientError;

/// Default relay address
pub const DEFAULT_URL: &str = "ws://127.0.0.1:8080";

pub(crate) type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub(crate) async fn connect(url: &str) -> Result<WsStream, ClientError> {
    let (stream, _response) = connect_async(url)
        .await
        .map_err(|source| ClientError::Connect {
            url: url.to_string(),
            source,
        })?;
    Ok(stream)
}

/// Print every frame broadcast by the relay until the server closes.
pub async fn run_listen(url: &str) -> Result<(), ClientError> {
    let mut stream = connect(url).await?;
    tracing::info!("Connected to {}", url);

    while let Some(frame) = stream.next().await {
        match frame? {
            Message::Text(text) => println!("{}", text.as_str()),
            Message::Close(_) => break,
            _ => {}
        }
    }

    tracing::info!("Connection closed");
    Ok(())
}

/// Send each line typed at the prompt as one frame; print broadcasts as they arrive.
///
/// `/quit`, Ctrl-C or Ctrl-D ends the session.
pub async fn run_chat(url: &str) -> Result<(), ClientError> {
    let stream = connect(url).await?;
    let (mut sink, mut source) = stream.split();
    println!("*** connected to {url}, type JSON and press enter (/quit to leave)");

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    let mut editor = DefaultEditor::new()?;

    // rustyline blocks; a detached thread does not hold up runtime shutdown
    thread::spawn(move || {
        loop {
            match editor.readline("> ") {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = editor.add_history_entry(line.as_str());
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::error!("Prompt error: {}", e);
                    break;
                }
            }
        }
    });

    loop {
        tokio::select! {
            line = line_rx.recv() => match line {
                Some(line) if line == "/quit" => break,
                Some(line) => sink.send(Message::text(line)).await?,
                None => break,
            },
            frame = source.next() => match frame {
                Some(Ok(Message::Text(text))) => println!("{}", text.as_str()),
                Some(Ok(Message::Close(_))) | None => return Err(ClientError::Closed),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
            },
        }
    }

    println!("*** leaving");
    let _ = sink.close().await;
    Ok(())
}
