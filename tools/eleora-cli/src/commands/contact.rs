//! Contact messages: storefront form and back-office inbox.

use anyhow::Result;
use dialoguer::Input;
use eleora_store::{ContactMessage, ContactStore};

use super::{ContactArgs, ContactCommand};
use crate::context::Context;
use crate::output::format_timestamp;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ContactCommand::Send => send(ctx),
        ContactCommand::List => list(ctx),
    }
}

fn send(ctx: &Context) -> Result<()> {
    let name: String = Input::new().with_prompt("Your name").interact_text()?;
    let email: String = Input::new().with_prompt("Your email").interact_text()?;
    let message: String = Input::new().with_prompt("Message").interact_text()?;

    let message = ContactMessage::new(name, email, message);
    ctx.contacts().insert(&message)?;
    ctx.output
        .success("Thanks! We'll get back to you shortly.");
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let messages = ctx.contacts().list()?;

    if ctx.output.is_json() {
        ctx.output.json(&messages);
        return Ok(());
    }

    if messages.is_empty() {
        ctx.output.info("No messages.");
        return Ok(());
    }

    ctx.output.header("Messages");
    for message in &messages {
        ctx.output.info(&format!(
            "{}  {} <{}>",
            format_timestamp(message.created_at),
            message.name,
            message.email
        ));
        ctx.output.list_item(&message.message);
    }
    Ok(())
}
