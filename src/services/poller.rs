use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{error, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::cache::{GameCache, Previous};
use crate::config::AppConfig;
use crate::domain::CurrentGame;
use crate::errors::FetchError;
use crate::services::fetcher::GameFetcher;
use crate::services::visibility::{Visibility, VisibilityController};

/// Frame published to the presentation boundary after every relevant change
#[derive(Debug, Clone)]
pub enum OverlayFrame {
    /// Nothing fetched yet for the active subject
    Loading,
    /// No profile id configured; the presentation layer renders guidance
    MissingSubject,
    /// The first load for the active subject failed
    Error(String),
    Game {
        game: Arc<CurrentGame>,
        visibility: Visibility,
    },
}

/// Owns the repeating poll cycle for the active subject.
///
/// One timer per subject: starting or switching subjects cancels the
/// previous cycle and begins with a fresh first load. The poll task handle
/// is held by this session and aborted on drop, on every exit path.
pub struct Poller {
    config: AppConfig,
    frames_tx: watch::Sender<OverlayFrame>,
    frames_rx: watch::Receiver<OverlayFrame>,
    commands: Option<mpsc::UnboundedSender<Visibility>>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start polling, or publish the missing-subject frame when no profile
    /// id is configured
    pub fn start(config: AppConfig, profile_id: Option<u64>) -> Result<Self> {
        let initial = match profile_id {
            Some(_) => OverlayFrame::Loading,
            None => OverlayFrame::MissingSubject,
        };
        let (frames_tx, frames_rx) = watch::channel(initial);

        let mut poller = Self {
            config,
            frames_tx,
            frames_rx,
            commands: None,
            handle: None,
        };
        if let Some(profile_id) = profile_id {
            poller.spawn(profile_id)?;
        }
        Ok(poller)
    }

    /// Subscribe to published frames
    pub fn frames(&self) -> watch::Receiver<OverlayFrame> {
        self.frames_rx.clone()
    }

    /// Switch to a new subject: cancels the running cycle and restarts with
    /// a fresh first load
    pub fn set_subject(&mut self, profile_id: u64) -> Result<()> {
        self.cancel();
        self.frames_tx.send_replace(OverlayFrame::Loading);
        self.spawn(profile_id)
    }

    /// Operator toggle: force the overlay visible or hidden regardless of
    /// the transition rules
    pub fn force_visibility(&self, visibility: Visibility) {
        if let Some(commands) = &self.commands {
            let _ = commands.send(visibility);
        }
    }

    fn spawn(&mut self, profile_id: u64) -> Result<()> {
        let fetcher = GameFetcher::new(&self.config)?;
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let sync_every = Duration::from_secs(self.config.overlay.sync_interval_secs);

        info!(
            "Polling profile {} every {}s",
            profile_id,
            sync_every.as_secs()
        );
        self.commands = Some(commands_tx);
        self.handle = Some(tokio::spawn(poll_loop(
            fetcher,
            profile_id,
            sync_every,
            self.frames_tx.clone(),
            commands_rx,
        )));
        Ok(())
    }

    fn cancel(&mut self) {
        self.commands = None;
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn poll_loop(
    fetcher: GameFetcher,
    profile_id: u64,
    sync_every: Duration,
    frames: watch::Sender<OverlayFrame>,
    mut commands: mpsc::UnboundedReceiver<Visibility>,
) {
    let mut cache = GameCache::new();
    cache.bind(profile_id);
    let mut visibility = VisibilityController::new();

    let mut ticker = interval(sync_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                poll_once(&fetcher, profile_id, &mut cache, &mut visibility, &frames).await;
            }
            Some(state) = commands.recv() => {
                apply_force(state, &cache, &mut visibility, &frames);
            }
        }
    }
}

async fn poll_once(
    fetcher: &GameFetcher,
    profile_id: u64,
    cache: &mut GameCache,
    visibility: &mut VisibilityController,
    frames: &watch::Sender<OverlayFrame>,
) {
    let previous = cache.begin_fetch();
    let outcome = fetcher.fetch_last_game(profile_id, &previous).await;
    apply_poll(profile_id, &previous, outcome, cache, visibility, frames);
}

/// Merge a finished poll into the session state.
///
/// A frame is published only when something actually changed: a new game
/// instance or a visibility transition. An unchanged refresh (the fetcher
/// handed back the previous instance by identity) leaves the watch version
/// alone so subscribers do not wake for an identical frame.
fn apply_poll(
    profile_id: u64,
    previous: &Previous,
    outcome: Result<Arc<CurrentGame>, FetchError>,
    cache: &mut GameCache,
    visibility: &mut VisibilityController,
    frames: &watch::Sender<OverlayFrame>,
) {
    match outcome {
        Ok(game) => {
            if !cache.resolve(profile_id, Arc::clone(&game)) {
                return;
            }
            let transitioned = visibility.observe(&game).is_some();
            let unchanged = previous
                .value
                .as_ref()
                .is_some_and(|value| Arc::ptr_eq(value, &game));
            if unchanged && !transitioned {
                return;
            }
            frames.send_replace(OverlayFrame::Game {
                game,
                visibility: visibility.state(),
            });
        }
        // Refresh failures are settled inside the fetcher; an error here is
        // a failed first load.
        Err(err) => {
            cache.resolve_failure(profile_id);
            error!("First load failed for profile {}: {}", profile_id, err);
            frames.send_replace(OverlayFrame::Error(err.to_string()));
        }
    }
}

/// Operator toggle: republish the last known game under the forced state.
/// With nothing fetched yet there is nothing to show or hide.
fn apply_force(
    state: Visibility,
    cache: &GameCache,
    visibility: &mut VisibilityController,
    frames: &watch::Sender<OverlayFrame>,
) {
    visibility.force(state);
    if let Some(game) = cache.value() {
        frames.send_replace(OverlayFrame::Game {
            game: Arc::clone(game),
            visibility: state,
        });
    }
}
