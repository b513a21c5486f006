//! Session commands

use colored::Colorize;
use prettytable::{row, Table};

use crate::cli::SessionCommand;
use crate::context::AppContext;
use crate::error::Result;
use crate::forms::{validation_error, SessionForm};
use crate::models::{RecordId, Routine, Session};

use super::report_field_errors;

/// Dispatch a session subcommand.
pub async fn run(ctx: &AppContext, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::List { json } => list(ctx, json).await,
        SessionCommand::Show { id, json } => show(ctx, id, json).await,
        SessionCommand::Add {
            note,
            date,
            duration,
            client,
            trainer,
            routine,
        } => {
            let mut form = SessionForm {
                note,
                client: Some(client),
                trainer: Some(trainer),
                routine: Some(routine),
                ..SessionForm::default()
            };
            if let Some(date) = date {
                form.date = date;
            }
            if let Some(duration) = duration {
                form.duration = duration;
            }
            add(ctx, form).await
        }
        SessionCommand::Update {
            id,
            note,
            date,
            duration,
            client,
            trainer,
            routine,
        } => update(ctx, id, note, date, duration, client, trainer, routine).await,
        SessionCommand::Delete { id } => delete(ctx, id).await,
        SessionCommand::Routines => {
            routines();
            Ok(())
        }
    }
}

/// List all sessions.
pub async fn list(ctx: &AppContext, json: bool) -> Result<()> {
    ctx.sessions.refresh().await?;
    let sessions = ctx.sessions.items();

    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    if sessions.is_empty() {
        println!("No sessions recorded.");
        return Ok(());
    }

    println!("\nSessions:\n");
    render_table(&sessions);
    println!();
    Ok(())
}

/// Show one session by id.
pub async fn show(ctx: &AppContext, id: RecordId, json: bool) -> Result<()> {
    let session = ctx.sessions.fetch(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    println!("{}", session.note.bold());
    println!("  Date:     {}", session.date);
    println!("  Duration: {}", session.duration);
    println!("  Client:   {}", session.client.name);
    println!("  Trainer:  {}", session.trainer.name);
    println!("  Routine:  {}", session.routine);
    println!("  ID:       {}", id);
    Ok(())
}

/// Record a new session.
///
/// Client and trainer sets are refreshed first so the cross-reference gate
/// checks against current data; the gate runs before any create request.
pub async fn add(ctx: &AppContext, form: SessionForm) -> Result<()> {
    ctx.clients.refresh().await?;
    ctx.trainers.refresh().await?;

    let draft = match form.validate(&ctx.clients.items(), &ctx.trainers.items()) {
        Ok(draft) => draft,
        Err(errors) => {
            report_field_errors(&errors);
            return Err(validation_error(errors));
        }
    };

    let created = ctx.sessions.create(&draft).await?;
    println!(
        "{} session {:?} on {} (id {})",
        "Created".green().bold(),
        created.note,
        created.date,
        created.id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
    );
    Ok(())
}

/// Update an existing session, keeping unspecified fields as-is.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    ctx: &AppContext,
    id: RecordId,
    note: Option<String>,
    date: Option<String>,
    duration: Option<String>,
    client: Option<RecordId>,
    trainer: Option<RecordId>,
    routine: Option<String>,
) -> Result<()> {
    ctx.clients.refresh().await?;
    ctx.trainers.refresh().await?;
    let current = ctx.sessions.fetch(id).await?;

    let form = SessionForm {
        note: note.unwrap_or(current.note),
        date: date.unwrap_or_else(|| current.date.to_string()),
        duration: duration.unwrap_or_else(|| current.duration.to_string()),
        client: client.or(Some(current.client.id)),
        trainer: trainer.or(Some(current.trainer.id)),
        routine: routine.or_else(|| Some(current.routine.name().to_string())),
    };

    let draft = match form.validate(&ctx.clients.items(), &ctx.trainers.items()) {
        Ok(draft) => draft,
        Err(errors) => {
            report_field_errors(&errors);
            return Err(validation_error(errors));
        }
    };

    let updated = ctx.sessions.update(id, &draft).await?;
    println!(
        "{} session {:?} (id {})",
        "Updated".green().bold(),
        updated.note,
        id
    );
    Ok(())
}

/// Delete a session by id.
pub async fn delete(ctx: &AppContext, id: RecordId) -> Result<()> {
    ctx.sessions.delete(id).await?;
    println!("{} session {}", "Deleted".yellow().bold(), id);
    Ok(())
}

/// Print the fixed routine catalogue.
pub fn routines() {
    let mut table = Table::new();
    table.add_row(row!["ID", "Routine"]);
    for routine in Routine::ALL {
        table.add_row(row![routine.id(), routine.name()]);
    }
    println!("\nRoutine catalogue:\n");
    table.printstd();
    println!();
}

fn render_table(sessions: &[Session]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Date", "Note", "Duration", "Client", "Trainer", "Routine"]);
    for session in sessions {
        table.add_row(row![
            session.id.map(|id| id.to_string()).unwrap_or_default(),
            session.date,
            session.note,
            session.duration,
            session.client.name,
            session.trainer.name,
            session.routine
        ]);
    }
    table.printstd();
}
