//! Application state

use battle_core::{
    BattleConfig, BattleEngine, CatalogSource, CombatantSource, MoveSlot, SetupError, TurnOutcome,
    MOVE_SLOTS,
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Rules, while rosters load in the background
    Start,
    Battle,
    Result,
}

/// Source for a new match, either fixed or re-seeded per match
enum SourceFactory {
    Fixed(Arc<dyn CombatantSource>),
    Catalog(BattleConfig),
}

type PendingMatch = oneshot::Receiver<Result<BattleEngine, SetupError>>;

pub struct App {
    pub screen: Screen,
    pub engine: Option<BattleEngine>,
    pub setup_error: Option<String>,
    pub selected_move: usize,
    pub log_scroll: usize,
    pub show_help: bool,
    pub last_outcome: Option<TurnOutcome>,
    /// Seed used for the current rosters, when drawn from the catalog
    pub seed: Option<u64>,
    roster_size: usize,
    factory: SourceFactory,
    pending: Option<PendingMatch>,
}

impl App {
    /// Create the app and start building rosters from the configured catalog
    ///
    /// Must be called from inside a tokio runtime.
    pub fn new(config: BattleConfig) -> Self {
        let roster_size = config.roster_size;
        let mut app = App::empty(SourceFactory::Catalog(config), roster_size);
        app.start_loading();
        app
    }

    /// Create the app with a custom combatant source
    pub fn with_source(source: Arc<dyn CombatantSource>, roster_size: usize) -> Self {
        let mut app = App::empty(SourceFactory::Fixed(source), roster_size);
        app.start_loading();
        app
    }

    fn empty(factory: SourceFactory, roster_size: usize) -> Self {
        App {
            screen: Screen::Start,
            engine: None,
            setup_error: None,
            selected_move: 0,
            log_scroll: 0,
            show_help: false,
            last_outcome: None,
            seed: None,
            roster_size,
            factory,
            pending: None,
        }
    }

    fn make_source(&mut self) -> Result<Arc<dyn CombatantSource>, String> {
        let mut config = match &self.factory {
            SourceFactory::Fixed(source) => return Ok(Arc::clone(source)),
            SourceFactory::Catalog(config) => config.clone(),
        };

        // Always pin a seed so a match can be replayed from the log
        let seed = config.seed.unwrap_or_else(rand::random);
        config.seed = Some(seed);
        self.seed = Some(seed);
        info!(seed, "drawing rosters");

        let source = CatalogSource::from_config(&config).map_err(|e| e.to_string())?;
        Ok(Arc::new(source))
    }

    /// Kick off roster building on the runtime
    fn start_loading(&mut self) {
        let source = match self.make_source() {
            Ok(source) => source,
            Err(err) => {
                error!(error = %err, "could not create combatant source");
                self.setup_error = Some(err);
                return;
            }
        };

        let (tx, rx) = oneshot::channel();
        let size = self.roster_size;
        tokio::spawn(async move {
            let result = BattleEngine::start(source, size).await;
            // The receiver is gone if the user restarted or quit meanwhile
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Check whether roster building has finished
    pub fn poll_loading(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.finish_loading(result);
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.pending = None;
                self.setup_error = Some("roster building stopped unexpectedly".to_string());
            }
        }
    }

    /// Wait for roster building to finish
    #[cfg(test)]
    pub async fn wait_for_rosters(&mut self) {
        if let Some(rx) = self.pending.take() {
            match rx.await {
                Ok(result) => self.finish_loading(result),
                Err(_) => {
                    self.setup_error = Some("roster building stopped unexpectedly".to_string());
                }
            }
        }
    }

    fn finish_loading(&mut self, result: Result<BattleEngine, SetupError>) {
        match result {
            Ok(engine) => {
                info!("rosters ready");
                self.engine = Some(engine);
            }
            Err(err) => {
                error!(error = %err, "match setup failed");
                self.setup_error = Some(err.to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Begin the battle from the start screen
    pub fn begin(&mut self) {
        if self.screen == Screen::Start && self.is_ready() {
            self.screen = Screen::Battle;
        }
    }

    /// Attack with the currently highlighted move
    pub fn attack_selected(&mut self) {
        self.attack(self.selected_move);
    }

    /// Attack with the move in `index`
    pub fn attack(&mut self, index: usize) {
        if self.screen != Screen::Battle {
            return;
        }
        let Some(slot) = MoveSlot::new(index) else {
            return;
        };
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        if let Some(outcome) = engine.attack(slot) {
            if outcome.fainted {
                self.selected_move = 0;
            }
            self.last_outcome = Some(outcome);
        }

        // Keep the newest entries in view
        let log_len = engine.log().len();
        self.log_scroll = log_len.saturating_sub(1);

        if engine.is_over() {
            self.screen = Screen::Result;
        }
    }

    /// Throw the current match away and build new rosters
    pub fn restart(&mut self) {
        info!("restarting");
        self.screen = Screen::Start;
        self.engine = None;
        self.setup_error = None;
        self.selected_move = 0;
        self.log_scroll = 0;
        self.last_outcome = None;
        self.pending = None;
        self.start_loading();
    }

    pub fn on_up(&mut self) {
        if self.screen == Screen::Battle && self.selected_move > 0 {
            self.selected_move -= 1;
        }
    }

    pub fn on_down(&mut self) {
        if self.screen == Screen::Battle && self.selected_move + 1 < MOVE_SLOTS {
            self.selected_move += 1;
        }
    }

    pub fn on_enter(&mut self) {
        match self.screen {
            Screen::Start => self.begin(),
            Screen::Battle => self.attack_selected(),
            Screen::Result => self.restart(),
        }
    }

    pub fn scroll_log_up(&mut self) {
        if self.log_scroll > 0 {
            self.log_scroll -= 1;
        }
    }

    pub fn scroll_log_down(&mut self) {
        let len = self.engine.as_ref().map_or(0, |e| e.log().len());
        if self.log_scroll + 1 < len {
            self.log_scroll += 1;
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
