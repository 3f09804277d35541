pub mod start;
pub mod help;
pub mod volume;
pub mod probe;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::{debug, error};
use crate::context::AppContext;
use crate::transport::{ChatTransport, SerenityChannel};

/// Entry point for every message the gateway delivers
pub async fn handle_message(app: &AppContext, ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let transport = SerenityChannel::new(ctx, msg.channel_id);
    dispatch(app, &transport, &msg.content).await;
}

/// Route one inbound text to its command. Each message is handled on its
/// own; nothing is carried over between calls.
pub async fn dispatch<T: ChatTransport>(app: &AppContext, transport: &T, content: &str) {
    let text = content.trim();
    let (head, args) = match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    };

    // `/volume@SomeBot` is only a command when SomeBot is us; otherwise it is plain text
    let command = match head.split_once('@') {
        Some((command, target)) if app.is_addressed_to(target) => command,
        Some(_) => "",
        None => head,
    };

    let result = match command {
        "/start" => start::execute(transport).await,
        "/help" => help::execute(transport).await,
        "/volume" => volume::execute(app, transport, args).await,
        _ => probe::execute(transport, text).await,
    };

    if let Err(e) = result {
        error!("❌ Error executing command {}: {}", command, e);

        let user_message = if e.contains("429") || e.to_lowercase().contains("rate limit") {
            "⚠️ **Rate Limited**: Please try again in a moment.".to_string()
        } else {
            "❌ An error occurred while executing the command.".to_string()
        };

        if let Err(e) = transport.send(&user_message).await {
            debug!("Could not report the error to the user: {}", e);
        }
    }
}
