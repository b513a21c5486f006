//! Client commands

use colored::Colorize;
use prettytable::{row, Table};

use crate::context::AppContext;
use crate::error::{OpenTrainerError, Result};
use crate::forms::{validation_error, ClientForm};
use crate::models::{Client, RecordId};

use super::report_field_errors;

/// List all clients.
pub async fn list(ctx: &AppContext, json: bool) -> Result<()> {
    ctx.clients.refresh().await?;
    let clients = ctx.clients.items();

    if json {
        println!("{}", serde_json::to_string_pretty(&clients)?);
        return Ok(());
    }

    if clients.is_empty() {
        println!("No clients registered.");
        return Ok(());
    }

    println!("\nClients:\n");
    render_table(&clients);
    println!();
    Ok(())
}

/// Show one client, looked up by id or by email.
pub async fn show(
    ctx: &AppContext,
    id: Option<RecordId>,
    email: Option<String>,
    json: bool,
) -> Result<()> {
    let client = match (id, email) {
        (Some(id), _) => ctx.clients.fetch(id).await?,
        (None, Some(email)) => ctx.api.client_by_email(&email).await?,
        (None, None) => {
            return Err(OpenTrainerError::Validation(
                "either an id or an email is required".to_string(),
            )
            .into())
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&client)?);
        return Ok(());
    }

    println!("{}", client.name.bold());
    println!("  Email:   {}", client.email);
    println!("  Trainer: {}", client.trainer.name);
    println!(
        "  ID:      {}",
        client.id.map(|id| id.to_string()).unwrap_or_default()
    );
    Ok(())
}

/// Register a new client under an existing trainer.
///
/// The trainer set is refreshed first so the cross-reference gate checks
/// against current data.
pub async fn add(
    ctx: &AppContext,
    name: String,
    email: String,
    password_hash: String,
    trainer: RecordId,
) -> Result<()> {
    ctx.trainers.refresh().await?;

    let form = ClientForm {
        name,
        email,
        password_hash,
        trainer: Some(trainer),
    };

    let draft = match form.validate(&ctx.trainers.items()) {
        Ok(draft) => draft,
        Err(errors) => {
            report_field_errors(&errors);
            return Err(validation_error(errors));
        }
    };

    let created = ctx.clients.create(&draft).await?;
    println!(
        "{} client {} (id {})",
        "Created".green().bold(),
        created.name,
        created.id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
    );
    Ok(())
}

/// Update an existing client, keeping unspecified fields as-is.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    ctx: &AppContext,
    id: RecordId,
    name: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
    trainer: Option<RecordId>,
) -> Result<()> {
    ctx.trainers.refresh().await?;
    let current = ctx.clients.fetch(id).await?;

    let form = ClientForm {
        name: name.unwrap_or(current.name),
        email: email.unwrap_or(current.email),
        password_hash: password_hash.unwrap_or(current.password_hash),
        trainer: trainer.or(current.trainer.id),
    };

    let draft = match form.validate(&ctx.trainers.items()) {
        Ok(draft) => draft,
        Err(errors) => {
            report_field_errors(&errors);
            return Err(validation_error(errors));
        }
    };

    let updated = ctx.clients.update(id, &draft).await?;
    println!("{} client {} (id {})", "Updated".green().bold(), updated.name, id);
    Ok(())
}

/// Delete a client by id.
pub async fn delete(ctx: &AppContext, id: RecordId) -> Result<()> {
    ctx.clients.delete(id).await?;
    println!("{} client {}", "Deleted".yellow().bold(), id);
    Ok(())
}

fn render_table(clients: &[Client]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Name", "Email", "Trainer"]);
    for client in clients {
        table.add_row(row![
            client.id.map(|id| id.to_string()).unwrap_or_default(),
            client.name,
            client.email,
            client.trainer.name
        ]);
    }
    table.printstd();
}
