//! Command-line interface definition
//!
//! This module defines the CLI structure using clap's derive API, with one
//! subcommand group per entity collection.

use clap::{Parser, Subcommand};

use crate::models::RecordId;

/// OpenTrainer - terminal client for the OpenTrainer fitness API
///
/// Browse and manage trainers, clients, and workout sessions held by a
/// remote OpenTrainer deployment.
#[derive(Parser, Debug, Clone)]
#[command(name = "opentrainer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the API base URL from config
    #[arg(long, env = "OPENTRAINER_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands, one group per collection.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage trainers
    Trainer {
        /// Trainer subcommand
        #[command(subcommand)]
        command: TrainerCommand,
    },

    /// Manage clients
    Client {
        /// Client subcommand
        #[command(subcommand)]
        command: ClientCommand,
    },

    /// Manage workout sessions
    Session {
        /// Session subcommand
        #[command(subcommand)]
        command: SessionCommand,
    },
}

/// Trainer subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TrainerCommand {
    /// List all trainers
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one trainer by id
    Show {
        /// Trainer id
        id: RecordId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new trainer
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Opaque credential hash
        #[arg(long = "password-hash")]
        password_hash: String,
    },

    /// Update an existing trainer
    Update {
        /// Trainer id
        id: RecordId,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New contact email
        #[arg(long)]
        email: Option<String>,

        /// New credential hash
        #[arg(long = "password-hash")]
        password_hash: Option<String>,
    },

    /// Delete a trainer by id
    Delete {
        /// Trainer id
        id: RecordId,
    },
}

/// Client subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ClientCommand {
    /// List all clients
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one client by id or email
    Show {
        /// Client id
        #[arg(required_unless_present = "email")]
        id: Option<RecordId>,

        /// Look up by email instead of id
        #[arg(long, conflicts_with = "id")]
        email: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new client
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Opaque credential hash
        #[arg(long = "password-hash")]
        password_hash: String,

        /// Id of the owning trainer
        #[arg(long)]
        trainer: RecordId,
    },

    /// Update an existing client
    Update {
        /// Client id
        id: RecordId,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New contact email
        #[arg(long)]
        email: Option<String>,

        /// New credential hash
        #[arg(long = "password-hash")]
        password_hash: Option<String>,

        /// New owning trainer id
        #[arg(long)]
        trainer: Option<RecordId>,
    },

    /// Delete a client by id
    Delete {
        /// Client id
        id: RecordId,
    },
}

/// Session subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    /// List all sessions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one session by id
    Show {
        /// Session id
        id: RecordId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a new session
    Add {
        /// Session note
        #[arg(long)]
        note: String,

        /// Calendar date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Length (HH:MM:SS), defaults to 01:00:00
        #[arg(long)]
        duration: Option<String>,

        /// Id of the attending client
        #[arg(long)]
        client: RecordId,

        /// Id of the leading trainer
        #[arg(long)]
        trainer: RecordId,

        /// Routine, by catalogue id or name
        #[arg(long)]
        routine: String,
    },

    /// Update an existing session
    Update {
        /// Session id
        id: RecordId,

        /// New note
        #[arg(long)]
        note: Option<String>,

        /// New calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New length (HH:MM:SS)
        #[arg(long)]
        duration: Option<String>,

        /// New attending client id
        #[arg(long)]
        client: Option<RecordId>,

        /// New leading trainer id
        #[arg(long)]
        trainer: Option<RecordId>,

        /// New routine, by catalogue id or name
        #[arg(long)]
        routine: Option<String>,
    },

    /// Delete a session by id
    Delete {
        /// Session id
        id: RecordId,
    },

    /// List the fixed routine catalogue
    Routines,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            api_url: None,
            verbose: false,
            command: Commands::Trainer {
                command: TrainerCommand::List { json: false },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Trainer {
                command: TrainerCommand::List { json: false }
            }
        ));
    }

    #[test]
    fn test_cli_parse_trainer_list() {
        let cli = Cli::try_parse_from(["opentrainer", "trainer", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Trainer {
                command: TrainerCommand::List { json: false }
            }
        ));
    }

    #[test]
    fn test_cli_parse_trainer_list_json() {
        let cli = Cli::try_parse_from(["opentrainer", "trainer", "list", "--json"]).unwrap();
        if let Commands::Trainer {
            command: TrainerCommand::List { json },
        } = cli.command
        {
            assert!(json);
        } else {
            panic!("Expected trainer list command");
        }
    }

    #[test]
    fn test_cli_parse_trainer_add() {
        let cli = Cli::try_parse_from([
            "opentrainer",
            "trainer",
            "add",
            "--name",
            "John Addams",
            "--email",
            "john@open.trainer",
            "--password-hash",
            "h1",
        ])
        .unwrap();
        if let Commands::Trainer {
            command:
                TrainerCommand::Add {
                    name,
                    email,
                    password_hash,
                },
        } = cli.command
        {
            assert_eq!(name, "John Addams");
            assert_eq!(email, "john@open.trainer");
            assert_eq!(password_hash, "h1");
        } else {
            panic!("Expected trainer add command");
        }
    }

    #[test]
    fn test_cli_parse_trainer_add_requires_name() {
        let cli = Cli::try_parse_from([
            "opentrainer",
            "trainer",
            "add",
            "--email",
            "john@open.trainer",
            "--password-hash",
            "h1",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_client_show_by_id() {
        let cli = Cli::try_parse_from(["opentrainer", "client", "show", "7"]).unwrap();
        if let Commands::Client {
            command: ClientCommand::Show { id, email, .. },
        } = cli.command
        {
            assert_eq!(id, Some(7));
            assert_eq!(email, None);
        } else {
            panic!("Expected client show command");
        }
    }

    #[test]
    fn test_cli_parse_client_show_by_email() {
        let cli = Cli::try_parse_from([
            "opentrainer",
            "client",
            "show",
            "--email",
            "james@open.trainer",
        ])
        .unwrap();
        if let Commands::Client {
            command: ClientCommand::Show { id, email, .. },
        } = cli.command
        {
            assert_eq!(id, None);
            assert_eq!(email, Some("james@open.trainer".to_string()));
        } else {
            panic!("Expected client show command");
        }
    }

    #[test]
    fn test_cli_parse_client_show_requires_id_or_email() {
        let cli = Cli::try_parse_from(["opentrainer", "client", "show"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_client_show_rejects_both() {
        let cli = Cli::try_parse_from([
            "opentrainer",
            "client",
            "show",
            "7",
            "--email",
            "james@open.trainer",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_session_add() {
        let cli = Cli::try_parse_from([
            "opentrainer",
            "session",
            "add",
            "--note",
            "Leg day",
            "--client",
            "1",
            "--trainer",
            "2",
            "--routine",
            "Leg",
        ])
        .unwrap();
        if let Commands::Session {
            command:
                SessionCommand::Add {
                    note,
                    date,
                    duration,
                    client,
                    trainer,
                    routine,
                },
        } = cli.command
        {
            assert_eq!(note, "Leg day");
            assert_eq!(date, None);
            assert_eq!(duration, None);
            assert_eq!(client, 1);
            assert_eq!(trainer, 2);
            assert_eq!(routine, "Leg");
        } else {
            panic!("Expected session add command");
        }
    }

    #[test]
    fn test_cli_parse_session_routines() {
        let cli = Cli::try_parse_from(["opentrainer", "session", "routines"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Session {
                command: SessionCommand::Routines
            }
        ));
    }

    #[test]
    fn test_cli_parse_session_delete() {
        let cli = Cli::try_parse_from(["opentrainer", "session", "delete", "3"]).unwrap();
        if let Commands::Session {
            command: SessionCommand::Delete { id },
        } = cli.command
        {
            assert_eq!(id, 3);
        } else {
            panic!("Expected session delete command");
        }
    }

    #[test]
    fn test_cli_parse_with_config_and_api_url() {
        let cli = Cli::try_parse_from([
            "opentrainer",
            "--config",
            "custom.yaml",
            "--api-url",
            "http://127.0.0.1:9000/OpenTrainer",
            "trainer",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
        assert_eq!(
            cli.api_url,
            Some("http://127.0.0.1:9000/OpenTrainer".to_string())
        );
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["opentrainer"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["opentrainer", "workout"]);
        assert!(cli.is_err());
    }
}
