//! Trainer commands

use colored::Colorize;
use prettytable::{row, Table};

use crate::context::AppContext;
use crate::error::Result;
use crate::forms::{validation_error, TrainerForm};
use crate::models::{RecordId, Trainer};

use super::report_field_errors;

/// List all trainers.
pub async fn list(ctx: &AppContext, json: bool) -> Result<()> {
    ctx.trainers.refresh().await?;
    let trainers = ctx.trainers.items();

    if json {
        println!("{}", serde_json::to_string_pretty(&trainers)?);
        return Ok(());
    }

    if trainers.is_empty() {
        println!("No trainers registered.");
        return Ok(());
    }

    println!("\nTrainers:\n");
    render_table(&trainers);
    println!();
    Ok(())
}

/// Show one trainer by id.
pub async fn show(ctx: &AppContext, id: RecordId, json: bool) -> Result<()> {
    let trainer = ctx.trainers.fetch(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&trainer)?);
        return Ok(());
    }

    println!("{}", trainer.name.bold());
    println!("  Email: {}", trainer.email);
    println!("  ID:    {}", id);
    Ok(())
}

/// Register a new trainer.
pub async fn add(ctx: &AppContext, form: TrainerForm) -> Result<()> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            report_field_errors(&errors);
            return Err(validation_error(errors));
        }
    };

    let created = ctx.trainers.create(&draft).await?;
    println!(
        "{} trainer {} (id {})",
        "Created".green().bold(),
        created.name,
        created.id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
    );
    Ok(())
}

/// Update an existing trainer, keeping unspecified fields as-is.
pub async fn update(
    ctx: &AppContext,
    id: RecordId,
    name: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
) -> Result<()> {
    let current = ctx.trainers.fetch(id).await?;

    let form = TrainerForm {
        name: name.unwrap_or(current.name),
        email: email.unwrap_or(current.email),
        password_hash: password_hash.unwrap_or(current.password_hash),
    };

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            report_field_errors(&errors);
            return Err(validation_error(errors));
        }
    };

    let updated = ctx.trainers.update(id, &draft).await?;
    println!("{} trainer {} (id {})", "Updated".green().bold(), updated.name, id);
    Ok(())
}

/// Delete a trainer by id.
pub async fn delete(ctx: &AppContext, id: RecordId) -> Result<()> {
    ctx.trainers.delete(id).await?;
    println!("{} trainer {}", "Deleted".yellow().bold(), id);
    Ok(())
}

fn render_table(trainers: &[Trainer]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Name", "Email"]);
    for trainer in trainers {
        table.add_row(row![
            trainer.id.map(|id| id.to_string()).unwrap_or_default(),
            trainer.name,
            trainer.email
        ]);
    }
    table.printstd();
}
