//! Command line and environment configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::backend::Stores;
use crate::i18n::Locale;
use crate::store::{JsonIdentityStore, JsonQuestionStore, JsonResultStore, QuestionOrder};

#[derive(Parser, Debug)]
#[command(version, about = "Scenario-based cybersecurity awareness assessment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the question bank, results and users
    #[arg(long, env = "CYREX_DATA_DIR", default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Question bank file [default: <data-dir>/questions.json]
    #[arg(long, env = "CYREX_QUESTIONS", global = true)]
    pub questions: Option<PathBuf>,

    /// Local user to sign in as
    #[arg(short, long, env = "CYREX_USER", default_value = "guest", global = true)]
    pub user: String,

    /// Display language, overriding the stored preference
    #[arg(long, env = "CYREX_LOCALE", value_enum, global = true)]
    pub locale: Option<Locale>,

    /// Order in which questions are asked
    #[arg(long, value_enum, default_value_t = QuestionOrder::ScamNumber, global = true)]
    pub order: QuestionOrder,

    /// Log file for the interactive session [default: <data-dir>/cyrex.log]
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Take an assessment in the terminal (default)
    Run,

    /// Print your past results, most recent first
    History {
        /// Show at most this many results
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Check the question bank and report rejected records
    Validate,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub questions_path: PathBuf,
    pub results_path: PathBuf,
    pub users_path: PathBuf,
    pub log_path: PathBuf,
    pub user: String,
    pub locale: Option<Locale>,
    pub order: QuestionOrder,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    pub fn config(&self) -> Config {
        let data_dir = &self.data_dir;
        Config {
            questions_path: self
                .questions
                .clone()
                .unwrap_or_else(|| data_dir.join("questions.json")),
            results_path: data_dir.join("results.json"),
            users_path: data_dir.join("users.json"),
            log_path: self
                .log_file
                .clone()
                .unwrap_or_else(|| data_dir.join("cyrex.log")),
            user: self.user.trim().to_string(),
            locale: self.locale,
            order: self.order,
        }
    }
}

impl Config {
    pub fn question_store(&self) -> JsonQuestionStore {
        JsonQuestionStore::new(&self.questions_path, self.order)
    }

    /// File-backed stores for every collaborator.
    pub fn stores(&self) -> Stores {
        Stores {
            questions: Arc::new(self.question_store()),
            results: Arc::new(JsonResultStore::new(&self.results_path)),
            identity: Arc::new(JsonIdentityStore::new(&self.users_path)),
        }
    }
}
