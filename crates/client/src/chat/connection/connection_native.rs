//! Native/Desktop chat socket using tokio-tungstenite.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::{SinkExt, StreamExt};
use lahwita_shared::{
    ConnectRequest, Connector, Generation, ReconnectConfig, Transport, TransportError,
    TransportEvent,
};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{emit, EventSender};

enum Command {
    Send(String),
    Close,
}

/// Dials chat sockets on the tokio runtime.
pub struct SocketConnector {
    events: EventSender,
    reconnect: ReconnectConfig,
}

impl SocketConnector {
    pub fn new(events: EventSender, reconnect: ReconnectConfig) -> Self {
        Self { events, reconnect }
    }
}

impl Connector for SocketConnector {
    type Transport = SocketTransport;

    fn open(&mut self, request: ConnectRequest) -> SocketTransport {
        let (commands, receiver) = unbounded();
        let ready = Arc::new(AtomicBool::new(false));
        let delay_ms = self.reconnect.delay_for_attempt(request.attempt);

        tokio::spawn(run_socket(
            request,
            delay_ms,
            receiver,
            ready.clone(),
            self.events.clone(),
        ));

        SocketTransport { commands, ready }
    }
}

/// Handle to one socket task. Dropping it closes the socket.
pub struct SocketTransport {
    commands: UnboundedSender<Command>,
    ready: Arc<AtomicBool>,
}

impl Transport for SocketTransport {
    fn send(&self, text: String) -> Result<(), TransportError> {
        if !self.is_ready() {
            return Err(TransportError::NotReady);
        }
        self.commands
            .unbounded_send(Command::Send(text))
            .map_err(|e| TransportError::Send(e.to_string()))
    }

    fn close(&self) {
        self.ready.store(false, Ordering::SeqCst);
        let _ = self.commands.unbounded_send(Command::Close);
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

async fn run_socket(
    request: ConnectRequest,
    delay_ms: u32,
    mut commands: UnboundedReceiver<Command>,
    ready: Arc<AtomicBool>,
    events: EventSender,
) {
    let ConnectRequest {
        url, generation, attempt,
    } = request;

    if delay_ms > 0 {
        crate::log_info!("chat socket {generation}: retrying in {delay_ms}ms (attempt {attempt})");
        tokio::select! {
            _ = tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms as u64)) => {}
            // Closed or dropped before we even dialed
            _ = commands.next() => return,
        }
    }

    let stream = match connect_async(url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(e) => {
            let err = TransportError::Connect {
                url,
                reason: e.to_string(),
            };
            crate::log_error!("chat socket {generation}: {err}");
            emit(&events, generation, TransportEvent::Error);
            emit(&events, generation, TransportEvent::Closed);
            return;
        }
    };

    ready.store(true, Ordering::SeqCst);
    emit(&events, generation, TransportEvent::Opened);

    let (mut write, mut read) = stream.split();
    pump(generation, &mut commands, &mut write, &mut read, &events).await;

    ready.store(false, Ordering::SeqCst);
    crate::log_info!("chat socket {generation} to {url} closed");
    emit(&events, generation, TransportEvent::Closed);
}

/// Shuttle frames both ways until either side hangs up.
async fn pump<W, R>(
    generation: Generation,
    commands: &mut UnboundedReceiver<Command>,
    write: &mut W,
    read: &mut R,
    events: &EventSender,
) where
    W: futures_util::Sink<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
    R: futures_util::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>>
        + Unpin,
{
    loop {
        tokio::select! {
            cmd = commands.next() => match cmd {
                Some(Command::Send(text)) => {
                    crate::log_debug!("chat socket {generation} sending: {text}");
                    if let Err(e) = write.send(Message::Text(text.into())).await {
                        crate::log_error!("chat socket {generation}: send failed: {e}");
                        emit(events, generation, TransportEvent::Error);
                        return;
                    }
                }
                Some(Command::Close) | None => {
                    let _ = write.send(Message::Close(None)).await;
                    return;
                }
            },
            msg = read.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    emit(events, generation, TransportEvent::Message(text.as_str().to_owned()));
                }
                Some(Ok(Message::Close(_))) | None => return,
                Some(Ok(_)) => {
                    // Binary, ping and pong frames carry nothing for us; tungstenite answers pings
                }
                Some(Err(e)) => {
                    crate::log_error!("chat socket {generation}: read error: {e}");
                    emit(events, generation, TransportEvent::Error);
                    return;
                }
            },
        }
    }
}
