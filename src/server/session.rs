/// WebSocket session handler for the game socket.
///
/// This actor manages a single client connection: it decodes inbound frames,
/// relays typed client messages (match search, moves) to the game server, and
/// serializes server messages back to the client. It holds no game state of
/// its own; identities are minted by the game server on SearchMatch.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::debug;
use serde_json::Value;

use crate::server::game_server::{GameServer, PlayerMove, SearchMatch};
use crate::server::messages::{ClientWsMessage, ServerWsMessage};
use crate::server::ws_error::{internal_error_reply, invalid_message_reply};

/// Represents one client's WebSocket connection to the game socket.
pub struct GameSocketSession {
    pub server_addr: Addr<GameServer>,
}

impl Actor for GameSocketSession {
    type Context = ws::WebsocketContext<Self>;
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSocketSession {
    /// Handles incoming WebSocket frames from the client.
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                // A frame that is not JSON at all gets the generic error reply
                // from the transport; the game server never sees it.
                let value: Value = match serde_json::from_str(&text) {
                    Ok(value) => value,
                    Err(_) => {
                        ctx.text(invalid_message_reply());
                        return;
                    }
                };

                // Well-formed JSON with an unrecognized shape is dropped
                // without feedback.
                let msg = match serde_json::from_value::<ClientWsMessage>(value) {
                    Ok(msg) => msg,
                    Err(_) => {
                        debug!("[GameSocket] Unrecognized client message dropped");
                        return;
                    }
                };

                match msg {
                    ClientWsMessage::SearchMatch => {
                        self.server_addr.do_send(SearchMatch {
                            addr: ctx.address().recipient(),
                        });
                    }
                    ClientWsMessage::Move(data) => {
                        self.server_addr.do_send(PlayerMove {
                            player_id: data.player_id,
                            row: data.row,
                            col: data.col,
                        });
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(_)) => ctx.stop(),
            _ => (),
        }
    }
}

impl Handler<ServerWsMessage> for GameSocketSession {
    type Result = ();

    /// Handles messages sent from the game server to this session.
    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                // Serialization error: notify client and close connection.
                debug!("[GameSocket] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(internal_error_reply());
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for the game socket. No query parameters: identities
/// are minted server-side when the client sends SearchMatch.
pub async fn ws_game_socket(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(
        GameSocketSession {
            server_addr: data.game_server_addr.clone(),
        },
        &req,
        stream,
    )
}
