/*
[INPUT]:  Streaming endpoint URLs and optional credentials
[OUTPUT]: Live ticker/trade/orderbook/private events via blocking reads
[POS]:    WebSocket layer - session lifecycle, framing and keepalive
[UPDATE]: When the exchange changes its streaming endpoints or keepalive rules
*/

use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{Sink, SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use tokio::net::TcpStream;
use tokio::sync::{Mutex, watch};
use tokio::time::{Instant, interval_at};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::http::header::AUTHORIZATION;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, warn};

use crate::auth::{Credentials, JwtSigner};
use crate::http::{Result, UpbitError};
use crate::ws::Subscription;

const PUBLIC_WEBSOCKET_URL: &str = "wss://api.upbit.com/websocket/v1";
const PRIVATE_WEBSOCKET_URL: &str = "wss://api.upbit.com/websocket/v1/private";

/// The server drops connections idle longer than this window
const PONG_WAIT: Duration = Duration::from_secs(120);
/// Ping at 9/10 of the window so a tick always lands before the deadline
const PING_PERIOD: Duration = Duration::from_secs(PONG_WAIT.as_secs() * 9 / 10);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// Session on the public streaming endpoint.
///
/// Reads and writes are serialized behind separate locks: the connection's
/// two underlying streams each tolerate one caller at a time, but a reader
/// never blocks a writer. There is no keepalive loop here; callers own
/// liveness of the public session.
#[derive(Debug)]
pub struct PublicWebSocket {
    writer: Mutex<WsSink>,
    reader: Mutex<WsSource>,
}

impl PublicWebSocket {
    /// Dial the public streaming endpoint
    pub async fn connect() -> Result<Self> {
        Self::connect_to(PUBLIC_WEBSOCKET_URL).await
    }

    /// Dial an explicit URL. Used by tests to point at a local server.
    pub async fn connect_to(url: &str) -> Result<Self> {
        let (stream, _response) = connect_async(url).await.map_err(ws_error)?;
        let (writer, reader) = stream.split();

        Ok(Self {
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
        })
    }

    /// Write one subscription request as a single framed text message
    pub async fn subscribe(&self, subscription: &Subscription) -> Result<()> {
        send_subscription(&self.writer, subscription).await
    }

    /// Block until the next data frame arrives and decode it into `T`
    pub async fn read_message<T: DeserializeOwned>(&self) -> Result<T> {
        read_data_frame(&self.reader).await
    }

    /// Close the connection. Idempotent; writes after close are errors.
    pub async fn close(&self) -> Result<()> {
        close_writer(&self.writer).await
    }
}

/// Session on the authenticated streaming endpoint.
///
/// Connecting signs a minimal credential claim into the handshake headers and
/// starts a background keepalive loop. [`close`](PrivateWebSocket::close)
/// cancels the loop before closing the connection, so no ping is ever written
/// to a closed socket by a leaked task.
#[derive(Debug)]
pub struct PrivateWebSocket {
    writer: Arc<Mutex<WsSink>>,
    reader: Mutex<WsSource>,
    shutdown: watch::Sender<bool>,
}

impl PrivateWebSocket {
    /// Dial the private streaming endpoint with the given credentials
    pub async fn connect(credentials: Credentials) -> Result<Self> {
        Self::connect_to(PRIVATE_WEBSOCKET_URL, credentials).await
    }

    /// Dial an explicit URL. Used by tests to point at a local server.
    pub async fn connect_to(url: &str, credentials: Credentials) -> Result<Self> {
        let signer = JwtSigner::new(credentials);
        let token = signer.connect_token()?;

        let mut request = url.into_client_request().map_err(ws_error)?;
        let header = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| UpbitError::WebSocket(err.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, header);

        let (stream, _response) = connect_async(request).await.map_err(ws_error)?;
        let (writer, reader) = stream.split();
        let writer = Arc::new(Mutex::new(writer));

        let (shutdown, shutdown_rx) = watch::channel(false);
        tokio::spawn(keepalive(Arc::clone(&writer), PING_PERIOD, shutdown_rx));

        Ok(Self {
            writer,
            reader: Mutex::new(reader),
            shutdown,
        })
    }

    /// Write one subscription request as a single framed text message.
    ///
    /// Shares the write lock with the keepalive loop, so a subscription and a
    /// ping can never interleave on the wire.
    pub async fn subscribe(&self, subscription: &Subscription) -> Result<()> {
        send_subscription(&self.writer, subscription).await
    }

    /// Block until the next data frame arrives and decode it into `T`
    pub async fn read_message<T: DeserializeOwned>(&self) -> Result<T> {
        read_data_frame(&self.reader).await
    }

    /// Stop the keepalive loop and close the connection.
    ///
    /// Idempotent; the cancellation signal may fire into a loop that already
    /// exited and the sink close is a no-op on a closed connection.
    pub async fn close(&self) -> Result<()> {
        let _ = self.shutdown.send(true);
        close_writer(&self.writer).await
    }
}

async fn send_subscription<S>(writer: &Mutex<S>, subscription: &Subscription) -> Result<()>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let payload = serde_json::to_string(&subscription.frames())?;

    let mut writer = writer.lock().await;
    writer
        .send(Message::Text(payload.into()))
        .await
        .map_err(|err| UpbitError::WebSocket(err.to_string()))?;

    debug!(channel = ?subscription.channel, ticket = %subscription.ticket, "subscription sent");
    Ok(())
}

async fn read_data_frame<T: DeserializeOwned>(reader: &Mutex<WsSource>) -> Result<T> {
    let mut reader = reader.lock().await;
    loop {
        match reader.next().await {
            // the exchange delivers payloads as binary frames, text is accepted too
            Some(Ok(Message::Text(text))) => {
                return serde_json::from_str(&text).map_err(UpbitError::Decode);
            }
            Some(Ok(Message::Binary(bytes))) => {
                return serde_json::from_slice(&bytes).map_err(UpbitError::Decode);
            }
            Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) | Some(Ok(Message::Frame(_))) => {}
            Some(Ok(Message::Close(_))) | None => {
                return Err(UpbitError::WebSocket("connection closed".to_string()));
            }
            Some(Err(err)) => return Err(UpbitError::WebSocket(err.to_string())),
        }
    }
}

async fn close_writer(writer: &Mutex<WsSink>) -> Result<()> {
    let mut writer = writer.lock().await;
    match writer.close().await {
        Ok(()) | Err(WsError::ConnectionClosed) | Err(WsError::AlreadyClosed) => Ok(()),
        Err(err) => Err(UpbitError::WebSocket(err.to_string())),
    }
}

/// Periodically write a ping under the shared write lock until cancelled.
///
/// A failed ping is reported but does not tear the session down; the next
/// application read or write surfaces the dead connection. The loop also
/// exits when the session is dropped without an explicit close.
async fn keepalive<S>(writer: Arc<Mutex<S>>, period: Duration, mut shutdown: watch::Receiver<bool>)
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let mut ticker = interval_at(Instant::now() + period, period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut writer = writer.lock().await;
                if let Err(err) = writer.send(Message::Ping(b"PING".to_vec().into())).await {
                    warn!(error = %err, "keepalive ping failed");
                }
            }
            _ = shutdown.changed() => {
                debug!("keepalive loop stopped");
                return;
            }
        }
    }
}

fn ws_error(err: WsError) -> UpbitError {
    UpbitError::WebSocket(err.to_string())
}
