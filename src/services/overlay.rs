use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::cache::Previous;
use crate::config::AppConfig;
use crate::domain::{CurrentGame, GameResult, Player};
use crate::services::fetcher::GameFetcher;
use crate::services::poller::{OverlayFrame, Poller};
use crate::services::visibility::Visibility;

/// Terminal stand-in for the presentation boundary: subscribes to overlay
/// frames and prints them as they change.
pub struct OverlayService {
    config: AppConfig,
    profile_id: Option<u64>,
}

impl OverlayService {
    pub fn new(config: AppConfig, profile_id: Option<u64>) -> Self {
        Self { config, profile_id }
    }

    /// Run the poll cycle until interrupted
    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Overlay Watch ===");
        if let Some(theme) = &self.config.overlay.theme {
            info!("Theme: {}", theme);
        }

        let poller = Poller::start(self.config.clone(), self.profile_id)?;
        let mut frames = poller.frames();

        loop {
            {
                let frame = frames.borrow_and_update();
                render_frame(&frame);
            }
            if frames.changed().await.is_err() {
                break;
            }
        }
        Ok(())
    }

    /// Fetch the last game once and print it (first-load semantics: any
    /// failure propagates)
    pub async fn fetch_once(&self) -> Result<()> {
        let Some(profile_id) = self.profile_id else {
            render_frame(&OverlayFrame::MissingSubject);
            return Ok(());
        };

        let fetcher = GameFetcher::new(&self.config)?;
        let game = fetcher
            .fetch_last_game(profile_id, &Previous::default())
            .await?;
        render_game(&game, Visibility::Visible);
        Ok(())
    }
}

fn render_frame(frame: &OverlayFrame) {
    match frame {
        OverlayFrame::Loading => println!("{}", "Loading last match...".dimmed()),
        OverlayFrame::MissingSubject => {
            println!("{}", "No profile selected".bold());
            println!("Pass --profile-id <your profile id> to pick a player to track.");
        }
        OverlayFrame::Error(message) => {
            println!("{}", "Error while loading last match".red().bold());
            println!("{}", message);
        }
        OverlayFrame::Game { game, visibility } => render_game(game, *visibility),
    }
}

fn render_game(game: &CurrentGame, visibility: Visibility) {
    if visibility == Visibility::Hidden {
        println!("{}", "[overlay hidden]".dimmed());
        return;
    }

    let status = if game.ongoing {
        "LIVE".green().bold().to_string()
    } else if game.recently_finished {
        "just finished".to_string()
    } else {
        "finished".to_string()
    };
    println!("{} | {} | {}", game.map.as_str().bold(), game.kind, status);

    for player in &game.team {
        println!("  {}", format_player(player));
    }
    println!("  {}", "vs".dimmed());
    for player in &game.opponents {
        println!("  {}", format_player(player));
    }
}

fn format_player(player: &Player) -> String {
    let name = match player.result {
        Some(GameResult::Win) => player.name.as_str().green().to_string(),
        Some(GameResult::Loss) => player.name.as_str().red().to_string(),
        None => player.name.clone(),
    };

    let stats = match &player.mode_stats {
        Some(stats) => match (stats.rank, stats.rating) {
            (Some(rank), Some(rating)) => format!("#{} {}", rank, rating),
            (Some(rank), None) => format!("#{}", rank),
            (None, Some(rating)) => rating.to_string(),
            (None, None) => "No stats found".to_string(),
        },
        None if player.rank.as_deref().is_some_and(|r| r.ends_with("unranked")) => {
            "Unranked".to_string()
        }
        None => "No stats found".to_string(),
    };

    format!(
        "{} ({}) {}",
        name,
        player.civilization.short_name,
        stats.as_str().dimmed()
    )
}
