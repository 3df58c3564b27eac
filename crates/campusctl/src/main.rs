//! Campus Control - CLI front end for the quest engine
//!
//! Plays the role of the surrounding application: initializes the engine,
//! completes quests, records quiz scores, links wallets and shows the
//! leaderboard. Host identity can be injected with `--host-id` to simulate
//! the platform-provided user context; without it, sessions run as guests.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use campus_core::quests::{quest, QUESTS};
use campus_core::quiz::{self, quiz_questions};
use campus_core::{CoreConfig, HostUser, QuestEngine, QuestId, QuestStatus};

#[derive(Parser)]
#[command(name = "campusctl")]
#[command(about = "Campus Starter - gamified Solana onboarding", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory for local persistence (defaults to the platform
    /// local-data dir).
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Host-platform user id; omit to run as a guest.
    #[arg(long, global = true)]
    host_id: Option<i64>,

    /// Host-platform username.
    #[arg(long, global = true)]
    host_username: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current record, resume point and quest statuses
    Status,

    /// List the quest catalog
    Quests,

    /// Record completion of a quest by its numeric id
    Complete {
        /// Quest id (1-5)
        id: u8,
    },

    /// Link a wallet address
    Wallet { address: String },

    /// Grade quiz answers (comma-separated option indexes) and record the
    /// score; completes the quiz quest on a pass
    Quiz {
        #[arg(value_delimiter = ',')]
        answers: Vec<usize>,
    },

    /// Record a referred user id
    Refer { user_id: String },

    /// Show the leaderboard
    Leaderboard,

    /// Clear the current user's progress record
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let config = match &cli.data_dir {
        Some(dir) => CoreConfig::with_data_dir(dir),
        None => CoreConfig::default(),
    };

    let host = cli.host_id.map(|id| HostUser {
        id,
        username: cli.host_username.clone(),
        first_name: None,
        last_name: None,
    });

    let mut engine = QuestEngine::new(config);
    engine.initialize(host.as_ref());

    match cli.command {
        Commands::Status => show_status(&engine),
        Commands::Quests => show_quests(&engine),
        Commands::Complete { id } => {
            let Some(quest_id) = QuestId::from_id(id) else {
                bail!("quest id must be between 1 and 5, got {}", id);
            };
            engine.complete_quest(quest_id, quest(quest_id).reward);
            println!(
                "Quest {} ({}) completed. Total rewards: {} SOL",
                id,
                quest(quest_id).title,
                engine.total_rewards()
            );
        }
        Commands::Wallet { address } => {
            engine.set_wallet_address(&address);
            println!("Wallet linked: {}", address);
        }
        Commands::Quiz { answers } => {
            let questions = quiz_questions();
            let score = quiz::grade(questions, &answers);
            engine.set_quiz_score(score);
            println!("Score: {}/{}", score, questions.len());
            if quiz::passed(score) {
                engine.complete_quest(QuestId::Quiz, quest(QuestId::Quiz).reward);
                println!("Passed! Quiz quest completed.");
            } else {
                println!(
                    "Keep learning - you need {} correct to pass.",
                    quiz::QUIZ_PASS_SCORE
                );
            }
        }
        Commands::Refer { user_id } => {
            engine.add_referral(&user_id);
            println!("Referral recorded: {}", user_id);
        }
        Commands::Leaderboard => show_leaderboard(&engine),
        Commands::Reset => {
            engine.reset();
            println!("Progress cleared.");
        }
    }

    Ok(())
}

fn show_status(engine: &QuestEngine) {
    let Some(record) = engine.progress() else {
        println!("No progress record.");
        return;
    };

    println!("User:          {}", record.user_id);
    if let Some(wallet) = &record.wallet_address {
        println!("Wallet:        {}", wallet);
    }
    println!("Referral code: {}", record.referral_code);
    println!(
        "Quests:        {}/{} completed",
        engine.completed_quests_count(),
        QuestId::ALL.len()
    );
    println!("Rewards:       {} SOL", engine.total_rewards());
    println!("Quiz score:    {}", record.quiz_score);
    println!("Badge minted:  {}", record.badge_minted);
    match engine.last_active_quest() {
        Some(next) => println!("Resume at:     quest {} - {}", next.id(), quest(next).title),
        None => println!("Resume at:     all quests complete"),
    }
}

fn show_quests(engine: &QuestEngine) {
    for entry in QUESTS.iter() {
        let status = match engine.quest_status(entry.id) {
            QuestStatus::Completed => "done",
            QuestStatus::Available => "open",
            QuestStatus::Locked => "locked",
        };
        println!(
            "[{}] {} - {} ({} {})",
            status,
            entry.id.id(),
            entry.title,
            entry.reward,
            entry.reward_token
        );
    }
}

fn show_leaderboard(engine: &QuestEngine) {
    let entries = engine.list_leaderboard();
    if entries.is_empty() {
        println!("Leaderboard is empty.");
        return;
    }

    for (rank, entry) in entries.iter().enumerate() {
        let badge = if entry.badge_minted { " *" } else { "" };
        println!(
            "{:>3}. {} ({}) - {} SOL, {} quests{}",
            rank + 1,
            entry.first_name,
            entry.username,
            entry.total_rewards,
            entry.quests_completed,
            badge
        );
    }
}
