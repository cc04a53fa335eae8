//! Console bridge: the client side of the relay protocol.
//!
//! One [`ConsoleBridge`] owns one outbound WebSocket connection. It sends
//! the role-announcing `ping` on open, wraps submitted code as `eval`
//! frames, and turns inbound `print`/`log` frames into [`ConsoleEvent`]s
//! for the REPL widget. It never reconnects on its own: when the
//! connection drops, `submit` degrades to a local notice until the
//! operator calls [`ConsoleBridge::connect`] again for a fresh bridge.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsFrame;

use crate::analyzer::{self, Verdict};
use crate::error::ConsoleError;
use crate::protocol::{Message, MessageType, Source};

use super::events::ConsoleEvent;

/// Notice emitted locally when submitting without a live connection.
pub const NO_CONNECTION_NOTICE: &str = "[no connection]";

/// Client-side bridge between a REPL widget and the relay.
#[derive(Debug)]
pub struct ConsoleBridge {
    out_tx: UnboundedSender<String>,
    events_tx: UnboundedSender<ConsoleEvent>,
}

impl ConsoleBridge {
    /// Opens a connection to the relay and performs the console handshake.
    ///
    /// Returns the bridge handle plus the event stream the REPL widget
    /// should drain. Each call builds a fresh connection; reconnection is
    /// deliberately manual.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Transport`] when the WebSocket connection
    /// or the handshake send fails.
    pub async fn connect(
        url: &str,
    ) -> Result<(Self, UnboundedReceiver<ConsoleEvent>), ConsoleError> {
        let (socket, _response) = connect_async(url).await?;
        let (mut ws_tx, mut ws_rx) = socket.split();

        // Announce the console role before anything else can be routed.
        ws_tx
            .send(WsFrame::text(Message::ping(Source::Console).to_json()))
            .await?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();

        let _ = events_tx.send(ConsoleEvent::print("[server connection opened]"));

        let task_events = events_tx.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    // Inbound frame from the relay
                    frame = ws_rx.next() => {
                        match frame {
                            Some(Ok(WsFrame::Text(text))) => dispatch(&text, &task_events),
                            Some(Ok(WsFrame::Close(close))) => {
                                let reason = close
                                    .map(|c| c.reason.as_str().to_string())
                                    .unwrap_or_default();
                                let _ = task_events.send(closed_notice(&reason));
                                break;
                            }
                            Some(Err(err)) => {
                                let _ = task_events.send(closed_notice(&err.to_string()));
                                break;
                            }
                            None => {
                                let _ = task_events.send(closed_notice(""));
                                break;
                            }
                            _ => {}
                        }
                    }
                    // Code queued for the relay
                    queued = out_rx.recv() => {
                        match queued {
                            Some(frame) => {
                                if ws_tx.send(WsFrame::text(frame)).await.is_err() {
                                    let _ = task_events.send(closed_notice("send failed"));
                                    break;
                                }
                            }
                            // Bridge handle dropped; nothing left to send.
                            None => break,
                        }
                    }
                }
            }
            // Exiting drops out_rx: submit() now observes a closed channel
            // and reports "[no connection]" locally.
        });

        Ok((Self { out_tx, events_tx }, events_rx))
    }

    /// Submits code for remote evaluation.
    ///
    /// Without a live connection this emits [`NO_CONNECTION_NOTICE`] on the
    /// event stream instead — it never panics and never returns an error.
    pub fn submit(&self, code: &str) {
        let frame = Message::eval(code).to_json();
        if self.out_tx.send(frame).is_err() {
            let _ = self.events_tx.send(ConsoleEvent::print(NO_CONNECTION_NOTICE));
        }
    }

    /// Analyzes `buffer` and submits it only when it is complete.
    ///
    /// On an invalid verdict the reason is surfaced as a visible print
    /// event and nothing is sent; the caller should reset its buffer. On
    /// an incomplete verdict nothing happens; the caller should keep
    /// accumulating. The verdict is returned either way.
    pub fn submit_checked(&self, buffer: &str) -> Verdict {
        let verdict = analyzer::evaluate(buffer);
        match verdict {
            Verdict::Complete => self.submit(buffer),
            Verdict::Invalid(reason) => {
                let _ = self.events_tx.send(ConsoleEvent::print(reason.to_string()));
            }
            Verdict::Incomplete => {}
        }
        verdict
    }

    /// Returns `true` while the connection task is still running.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.out_tx.is_closed()
    }
}

/// Maps one inbound frame to console events; non-console frames and
/// malformed JSON are dropped.
fn dispatch(raw: &str, events: &UnboundedSender<ConsoleEvent>) {
    let msg = match Message::from_json(raw) {
        Ok(msg) => msg,
        Err(err) => {
            tracing::debug!(error = %err, "dropping malformed frame from relay");
            return;
        }
    };
    match msg.mtype {
        MessageType::Print => {
            let _ = events.send(ConsoleEvent::print(msg.message.unwrap_or_default()));
        }
        MessageType::Log => {
            let _ = events.send(ConsoleEvent::log(
                msg.topic.unwrap_or_default(),
                msg.message.unwrap_or_default(),
            ));
        }
        // eval and ping never target the console surface.
        MessageType::Eval | MessageType::Ping => {}
    }
}

fn closed_notice(reason: &str) -> ConsoleEvent {
    ConsoleEvent::print(format!("[server connection closed: {reason}]"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::analyzer::InvalidReason;

    /// Bridge wired to in-process channels instead of a socket.
    fn make_bridge() -> (
        ConsoleBridge,
        UnboundedReceiver<String>,
        UnboundedReceiver<ConsoleEvent>,
    ) {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (ConsoleBridge { out_tx, events_tx }, out_rx, events_rx)
    }

    #[test]
    fn submit_without_connection_reports_locally() {
        let (bridge, out_rx, mut events_rx) = make_bridge();
        drop(out_rx);
        assert!(!bridge.is_connected());

        bridge.submit("print(1)");

        let event = tokio_test::block_on(events_rx.recv());
        assert_eq!(event, Some(ConsoleEvent::print(NO_CONNECTION_NOTICE)));
    }

    #[test]
    fn submit_wraps_code_as_eval_frame() {
        let (bridge, mut out_rx, mut events_rx) = make_bridge();

        bridge.submit("1+1");

        assert_eq!(
            out_rx.try_recv().ok().as_deref(),
            Some(r#"{"source":"console","mtype":"eval","code":"1+1"}"#)
        );
        assert!(events_rx.try_recv().is_err());
    }

    #[test]
    fn submit_checked_sends_only_complete_buffers() {
        let (bridge, mut out_rx, mut events_rx) = make_bridge();

        assert_eq!(bridge.submit_checked("do print(1) end"), Verdict::Complete);
        assert!(out_rx.try_recv().is_ok());

        assert_eq!(bridge.submit_checked("do print(1)"), Verdict::Incomplete);
        assert!(out_rx.try_recv().is_err());
        assert!(events_rx.try_recv().is_err());
    }

    #[test]
    fn submit_checked_surfaces_invalid_reasons() {
        let (bridge, mut out_rx, mut events_rx) = make_bridge();

        let verdict = bridge.submit_checked("f(1,[2,3)");
        assert_eq!(
            verdict,
            Verdict::Invalid(InvalidReason::UnexpectedCloser(')'))
        );
        assert!(out_rx.try_recv().is_err());
        assert_eq!(
            events_rx.try_recv().ok(),
            Some(ConsoleEvent::print("unexpected closing bracket: ')'"))
        );
    }

    #[test]
    fn dispatch_maps_print_and_log() {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();

        dispatch(r#"{"source":"host","mtype":"print","message":"2"}"#, &events_tx);
        assert_eq!(events_rx.try_recv().ok(), Some(ConsoleEvent::print("2")));

        dispatch(
            r#"{"source":"host","mtype":"log","topic":"gfx","message":"frame"}"#,
            &events_tx,
        );
        assert_eq!(
            events_rx.try_recv().ok(),
            Some(ConsoleEvent::log("gfx", "frame"))
        );
    }

    #[test]
    fn dispatch_ignores_eval_ping_and_malformed() {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();

        dispatch(r#"{"source":"console","mtype":"eval","code":"1"}"#, &events_tx);
        dispatch(r#"{"source":"host","mtype":"ping"}"#, &events_tx);
        dispatch("not json", &events_tx);

        assert!(events_rx.try_recv().is_err());
    }
}
