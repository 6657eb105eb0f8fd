use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use std::{error::Error, io};

mod chain;
mod tui_logger;
#[cfg(feature = "wallet")]
mod wallet;

use chain::{fetch_table, QueryClient};
#[cfg(feature = "wallet")]
use mafia::wire::{ExecuteMsg, EVENT_GAME_ENDED, EVENT_VOTE_RESULT};
use mafia::wire::ConfigResponse;
#[cfg(feature = "wallet")]
use mafia::{check_join, check_tally, check_target, check_vote};
use mafia::{derive, Phase, Player, PlayerAction, Role, SnapshotStore, ViewModel};
use tui_logger::TuiLogger;
#[cfg(feature = "wallet")]
use wallet::Wallet;

/// How often the table is re-polled while idle.
const POLL_INTERVAL: Duration = Duration::from_secs(6);

#[derive(PartialEq)]
enum UiPhase {
    WalletSetup,
    ContractEntry,
    Table,
    PickTarget,
    PickModerator,
}

type RefreshOutcome = (u64, Result<Vec<Player>, String>, Result<Phase, String>);

struct App {
    ui_phase: UiPhase,
    store: SnapshotStore,
    view: ViewModel,
    status: String,
    logs: Vec<String>,
    log_buffer: Arc<Mutex<Vec<String>>>, // Shared buffer for capturing log:: messages
    log_visible: bool,
    refresh_task: Option<tokio::task::JoinHandle<RefreshOutcome>>,
    last_poll: Instant,
    query: Option<QueryClient>,
    game_config: Option<ConfigResponse>,
    contract_input: String,
    rpc_url: String,
    chain_id: String,
    #[cfg(feature = "wallet")]
    wallet: Option<Wallet>,
}

impl App {
    fn new(log_buffer: Arc<Mutex<Vec<String>>>) -> App {
        #[cfg(feature = "wallet")]
        let (ui_phase, status) = (
            UiPhase::WalletSetup,
            "Press [G] to generate a wallet, or set MAFIA_MNEMONIC and restart".to_string(),
        );
        #[cfg(not(feature = "wallet"))]
        let (ui_phase, status) = (
            UiPhase::ContractEntry,
            "Read-only build. Enter contract address".to_string(),
        );

        App {
            ui_phase,
            store: SnapshotStore::new(),
            view: ViewModel::default(),
            status,
            logs: vec![
                "Welcome to the Mafia table!".to_string(),
                "Connect a wallet, point at a deployed game contract,".to_string(),
                "and the table below follows the on-chain state.".to_string(),
            ],
            log_buffer,
            log_visible: true,
            refresh_task: None,
            last_poll: Instant::now(),
            query: None,
            game_config: None,
            contract_input: String::new(),
            rpc_url: std::env::var("RPC_URL")
                .unwrap_or_else(|_| "https://rpc.xion-testnet-2.burnt.com:443".to_string()),
            chain_id: std::env::var("CHAIN_ID").unwrap_or_else(|_| "xion-testnet-2".to_string()),
            #[cfg(feature = "wallet")]
            wallet: None,
        }
    }

    fn local_address(&self) -> Option<&str> {
        #[cfg(feature = "wallet")]
        {
            self.wallet.as_ref().map(|w| w.address())
        }
        #[cfg(not(feature = "wallet"))]
        {
            None
        }
    }

    fn sync_logs(&mut self) {
        let messages: Vec<String> = if let Ok(mut buffer) = self.log_buffer.lock() {
            buffer.drain(..).collect()
        } else {
            Vec::new()
        };

        for msg in messages {
            self.add_log(msg);
        }
    }

    fn add_log(&mut self, message: String) {
        self.logs.push(message);
        // Keep only last 20 log entries
        if self.logs.len() > 20 {
            self.logs.remove(0);
        }
    }

    /// Recompute the derived view from the current snapshot. The snapshot
    /// itself is only ever written by the refresh completion handler.
    fn refresh_view(&mut self) {
        let local = self.local_address().map(str::to_string);
        self.view = derive(self.store.snapshot(), local.as_deref());
        self.status = self.status_hints();
    }

    fn status_hints(&self) -> String {
        if self.store.snapshot().ended {
            return "Game over. [R]efresh [L]og [Q]uit".to_string();
        }
        let mut keys: Vec<&str> = Vec::new();
        if self.view.can_join {
            keys.push("[J]oin");
        }
        match self.view.action {
            Some(PlayerAction::SelectTarget) => keys.push("[T]arget"),
            Some(PlayerAction::CastVote) => keys.push("[V]ote"),
            _ => {}
        }
        if self.view.can_tally {
            keys.push("[C]ompute result");
        }
        keys.push("[R]efresh");
        keys.push("[L]og");
        keys.push("[Q]uit");
        keys.join("  ")
    }

    /// Kick off a background fetch of players and phase. Refreshes are
    /// serialized: while one is in flight further requests are dropped.
    fn request_refresh(&mut self) {
        if self.refresh_task.is_some() {
            return;
        }
        let Some(query) = self.query.clone() else {
            return;
        };
        let seq = self.store.begin_refresh();
        self.refresh_task = Some(tokio::task::spawn(async move {
            let (players, phase) = fetch_table(&query).await;
            (seq, players, phase)
        }));
    }

    async fn poll_refresh(&mut self) {
        let finished = self
            .refresh_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }
        let Some(task) = self.refresh_task.take() else {
            return;
        };

        match task.await {
            Ok((seq, players, phase)) => {
                match players {
                    Ok(players) => {
                        self.store.apply_players(seq, players);
                    }
                    Err(e) => log::warn!("Player fetch failed, keeping last snapshot: {e}"),
                }
                match phase {
                    Ok(phase) => {
                        self.store.apply_phase(seq, phase);
                    }
                    Err(e) => log::warn!("Phase fetch failed, keeping last snapshot: {e}"),
                }
                if self.store.snapshot().phase == Some(Phase::Voting) {
                    self.fetch_last_eliminated().await;
                }
                self.refresh_view();
            }
            Err(e) => log::warn!("Refresh task failed: {e}"),
        }
    }

    async fn fetch_last_eliminated(&mut self) {
        let Some(query) = self.query.clone() else {
            return;
        };
        match query.last_eliminated().await {
            Ok(eliminated) => self.store.set_last_eliminated(eliminated),
            Err(e) => log::warn!("Last-eliminated fetch failed: {e}"),
        }
    }

    async fn set_contract(&mut self, address: String) {
        let query = QueryClient::new(self.rpc_url.clone(), address.clone());
        match query.config().await {
            Ok(config) => {
                log::info!(
                    "Join fee {} {}, quorum {} players",
                    config.join_fee.0,
                    config.denom,
                    config.min_players
                );
                self.game_config = Some(config);
            }
            Err(e) => log::warn!("Config query failed: {e}"),
        }
        self.query = Some(query);
        self.add_log(format!("Contract address set: {address}"));
        self.ui_phase = UiPhase::Table;
        self.last_poll = Instant::now();
        self.request_refresh();
        self.refresh_view();
    }

    #[cfg(feature = "wallet")]
    fn setup_generated_wallet(&mut self) {
        match Wallet::generate("xion") {
            Ok((mut wallet, mnemonic)) => {
                self.add_log(format!("New wallet: {}", wallet.address()));
                self.add_log(format!("Mnemonic: {mnemonic}"));
                self.add_log("IMPORTANT: Save this mnemonic!".to_string());
                self.add_log(format!("Connecting to {}", self.rpc_url));
                match wallet.connect(&self.chain_id, &self.rpc_url, "xion") {
                    Ok(()) => {
                        self.add_log("Connected to blockchain".to_string());
                        self.wallet = Some(wallet);
                        self.ui_phase = UiPhase::ContractEntry;
                        self.status = "Enter contract address".to_string();
                    }
                    Err(e) => {
                        self.add_log(format!("RPC connection failed: {e}"));
                        self.status = "Connection failed. Press [Q] to quit".to_string();
                    }
                }
            }
            Err(e) => self.add_log(format!("Wallet generation failed: {e}")),
        }
    }

    /// Submit a transaction and, on confirmation, re-fetch both players
    /// and phase. Nothing is flipped locally ahead of confirmation: a
    /// rejected or reverted write leaves the snapshot exactly as it was.
    #[cfg(feature = "wallet")]
    fn submit(
        &mut self,
        msg: &ExecuteMsg,
        funds: Vec<mob::Coin>,
        memo: &str,
    ) -> Result<(), Box<dyn Error>> {
        let contract = self
            .query
            .as_ref()
            .ok_or("Contract address not set")?
            .contract()
            .to_string();
        let msg_bytes = msg.to_json_vec()?;

        let tx = {
            let wallet = self.wallet.as_ref().ok_or("Wallet not initialized")?;
            let client = wallet.client().ok_or("Client not connected")?;
            tokio::task::block_in_place(|| {
                client.execute_contract(contract, msg_bytes, funds, Some(memo.to_string()), None)
            })?
        };

        if tx.code != 0 {
            return Err(format!("Transaction failed: {}", tx.raw_log).into());
        }

        log::info!("Transaction confirmed: {}", tx.txhash);
        if tx.raw_log.contains(EVENT_GAME_ENDED) {
            self.store.mark_ended();
            log::info!("Game ended");
        }
        if tx.raw_log.contains(EVENT_VOTE_RESULT) {
            log::info!("Vote result computed");
        }
        self.request_refresh();
        Ok(())
    }

    #[cfg(feature = "wallet")]
    fn handle_join(&mut self) {
        if let Err(e) = check_join(self.store.snapshot(), self.local_address()) {
            self.add_log(format!("Cannot join: {e}"));
            return;
        }
        let Some(config) = self.game_config.clone() else {
            self.add_log("Join fee unknown: contract config was not loaded".to_string());
            return;
        };
        let funds = vec![mob::Coin::new(&config.denom, config.join_fee.0.clone())];
        self.add_log("Submitting join transaction...".to_string());
        if let Err(e) = self.submit(&ExecuteMsg::JoinGame {}, funds, "Join mafia game") {
            self.add_log(format!("Join failed: {e}"));
        }
    }

    #[cfg(feature = "wallet")]
    fn handle_pick_target(&mut self, index: usize) {
        let Some(target) = self.view.eligible_targets.get(index).cloned() else {
            return;
        };
        self.ui_phase = UiPhase::Table;
        if let Err(e) = check_target(self.store.snapshot(), self.local_address(), &target) {
            self.add_log(format!("Cannot target {target}: {e}"));
            self.refresh_view();
            return;
        }
        self.add_log(format!("Submitting target {target}..."));
        match self.submit(
            &ExecuteMsg::SelectTarget {
                target: target.clone(),
            },
            vec![],
            "Select target",
        ) {
            Ok(()) => self.add_log(format!("Target selected: {target}")),
            Err(e) => self.add_log(format!("Select target failed: {e}")),
        }
        self.refresh_view();
    }

    #[cfg(feature = "wallet")]
    fn handle_pick_moderator(&mut self, index: usize) {
        let Some(choice) = self.view.other_players.get(index).cloned() else {
            return;
        };
        self.ui_phase = UiPhase::Table;
        if let Err(e) = check_vote(self.store.snapshot(), self.local_address(), &choice) {
            self.add_log(format!("Cannot vote for {choice}: {e}"));
            self.refresh_view();
            return;
        }
        self.add_log(format!("Casting ballot for {choice}..."));
        match self.submit(
            &ExecuteMsg::VoteModerator {
                choice: choice.clone(),
            },
            vec![],
            "Vote moderator",
        ) {
            Ok(()) => self.add_log(format!("Ballot cast for {choice}")),
            Err(e) => self.add_log(format!("Vote failed: {e}")),
        }
        self.refresh_view();
    }

    #[cfg(feature = "wallet")]
    fn handle_tally(&mut self) {
        if let Err(e) = check_tally(self.store.snapshot(), self.local_address()) {
            self.add_log(format!("Cannot compute vote result: {e}"));
            return;
        }
        self.add_log("Triggering vote tally...".to_string());
        if let Err(e) = self.submit(&ExecuteMsg::ComputeVoteResult {}, vec![], "Compute vote result")
        {
            self.add_log(format!("Tally failed: {e}"));
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Initialize custom logger
    let (logger, log_buffer) = TuiLogger::new();
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(log::LevelFilter::Info))
        .expect("Failed to initialize logger");

    let mut app = App::new(log_buffer);

    #[cfg(feature = "wallet")]
    if let Ok(mnemonic) = std::env::var("MAFIA_MNEMONIC") {
        match Wallet::from_mnemonic(&mnemonic, "xion") {
            Ok(mut wallet) => match wallet.connect(&app.chain_id, &app.rpc_url, "xion") {
                Ok(()) => {
                    app.add_log(format!("Wallet loaded: {}", wallet.address()));
                    app.wallet = Some(wallet);
                    app.ui_phase = UiPhase::ContractEntry;
                    app.status = "Enter contract address".to_string();
                }
                Err(e) => app.add_log(format!("RPC connection failed: {e}")),
            },
            Err(e) => app.add_log(format!("MAFIA_MNEMONIC rejected: {e}")),
        }
    }

    if app.ui_phase == UiPhase::ContractEntry {
        if let Ok(contract) = std::env::var("CONTRACT") {
            app.set_contract(contract).await;
        }
    }

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}")
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<(), Box<dyn Error>>
where
    B::Error: 'static,
{
    loop {
        app.sync_logs();
        app.poll_refresh().await;

        if app.ui_phase == UiPhase::Table && app.last_poll.elapsed() >= POLL_INTERVAL {
            app.last_poll = Instant::now();
            app.request_refresh();
        }

        terminal.draw(|f| ui(f, &app))?;

        // Use poll with timeout so the view keeps updating between key presses
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Free-form typing only happens while entering the contract address;
        // everywhere else single keys dispatch actions.
        if app.ui_phase == UiPhase::ContractEntry {
            match key.code {
                KeyCode::Char(c) => app.contract_input.push(c),
                KeyCode::Backspace => {
                    app.contract_input.pop();
                }
                KeyCode::Enter if !app.contract_input.is_empty() => {
                    let address = app.contract_input.trim().to_string();
                    app.contract_input.clear();
                    app.set_contract(address).await;
                }
                KeyCode::Esc => return Ok(()),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if let Some(task) = app.refresh_task.take() {
                    task.abort();
                }
                return Ok(());
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                #[cfg(feature = "wallet")]
                if app.ui_phase == UiPhase::WalletSetup {
                    app.setup_generated_wallet();
                }
            }
            KeyCode::Char('j') | KeyCode::Char('J') => {
                #[cfg(feature = "wallet")]
                if app.ui_phase == UiPhase::Table && app.view.can_join {
                    app.handle_join();
                }
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                if app.ui_phase == UiPhase::Table
                    && app.view.action == Some(PlayerAction::SelectTarget)
                {
                    if app.view.eligible_targets.is_empty() {
                        app.add_log("No living targets to choose from".to_string());
                    } else {
                        app.ui_phase = UiPhase::PickTarget;
                        app.status = "Pick a target by number, [Esc] to cancel".to_string();
                    }
                }
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                if app.ui_phase == UiPhase::Table && app.view.action == Some(PlayerAction::CastVote)
                {
                    if app.view.other_players.is_empty() {
                        app.add_log("Nobody else to vote for".to_string());
                    } else {
                        app.ui_phase = UiPhase::PickModerator;
                        app.status = "Pick your ballot by number, [Esc] to cancel".to_string();
                    }
                }
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                #[cfg(feature = "wallet")]
                if app.ui_phase == UiPhase::Table && app.view.can_tally {
                    app.handle_tally();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if app.ui_phase == UiPhase::Table {
                    app.last_poll = Instant::now();
                    app.request_refresh();
                }
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                app.log_visible = !app.log_visible;
            }
            KeyCode::Char(c @ '0'..='9') => {
                #[cfg(feature = "wallet")]
                {
                    let index = (c as u8 - b'0') as usize;
                    match app.ui_phase {
                        UiPhase::PickTarget => app.handle_pick_target(index),
                        UiPhase::PickModerator => app.handle_pick_moderator(index),
                        _ => {}
                    }
                }
                #[cfg(not(feature = "wallet"))]
                let _ = c;
            }
            KeyCode::Esc => {
                if matches!(app.ui_phase, UiPhase::PickTarget | UiPhase::PickModerator) {
                    app.ui_phase = UiPhase::Table;
                    app.refresh_view();
                }
            }
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Table area
                Constraint::Length(3), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    let title_text = match app.local_address() {
        Some(addr) => format!("Mafia - On-Chain Social Deduction  [{addr}]"),
        None => "Mafia - On-Chain Social Deduction  [read-only]".to_string(),
    };
    let title = Paragraph::new(title_text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    // Split main area: left (table) and right (logs if visible)
    let (table_container, log_area) = if app.log_visible {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
            .split(main_chunks[1]);
        (horizontal[0], Some(horizontal[1]))
    } else {
        (main_chunks[1], None)
    };

    let table_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(table_container);

    render_players(f, app, table_area[0]);
    render_phase_panel(f, app, table_area[1]);

    if let Some(log_area) = log_area {
        render_logs(f, app, log_area);
    }

    let status_text = if app.ui_phase == UiPhase::ContractEntry {
        format!("Enter contract address > {}", app.contract_input)
    } else {
        app.status.clone()
    };
    let status_bar = Paragraph::new(status_text.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_bar, main_chunks[2]);
}

fn render_players(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.store.snapshot();
    let local = app.local_address();

    let (title, lines): (String, Vec<Line>) = match app.ui_phase {
        UiPhase::PickTarget => (
            " Select a target ".to_string(),
            numbered_lines(&app.view.eligible_targets),
        ),
        UiPhase::PickModerator => (
            " Vote for the moderator ".to_string(),
            numbered_lines(&app.view.other_players),
        ),
        _ => (
            format!(" Players ({}) ", snapshot.players.len()),
            snapshot
                .players
                .iter()
                .map(|p| player_line(p, local))
                .collect(),
        ),
    };

    let lines = if lines.is_empty() {
        vec![Line::from("Nobody has joined yet")]
    } else {
        lines
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn numbered_lines(addresses: &[String]) -> Vec<Line<'static>> {
    addresses
        .iter()
        .enumerate()
        .map(|(i, addr)| {
            Line::from(vec![
                Span::styled(format!("[{i}] "), Style::default().fg(Color::Yellow)),
                Span::raw(addr.clone()),
            ])
        })
        .collect()
}

fn player_line(player: &Player, local: Option<&str>) -> Line<'static> {
    let is_you = Some(player.address.as_str()) == local;
    let style = if !player.is_alive {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_you {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::styled(player.address.clone(), style)];
    if is_you {
        spans.push(Span::styled(" (YOU)", Style::default().fg(Color::Cyan)));
    }
    if !player.is_alive {
        spans.push(Span::styled(" ☠", Style::default().fg(Color::Red)));
    } else if player.has_voted {
        spans.push(Span::styled(" voted", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}

fn render_phase_panel(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.store.snapshot();
    let mut lines: Vec<Line> = Vec::new();

    if snapshot.ended {
        lines.push(Line::from(Span::styled(
            "Game over",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Phase::Ended.description()));
    } else {
        match snapshot.phase {
            Some(phase) => {
                lines.push(Line::from(vec![
                    Span::raw("Phase: "),
                    Span::styled(
                        phase.label(),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(phase.description()));
            }
            None => lines.push(Line::from("Phase: waiting for first fetch")),
        }

        if let Some(config) = &app.game_config {
            if snapshot.phase == Some(Phase::Registration) {
                lines.push(Line::from(format!(
                    "Joined {}/{} players, fee {} {}",
                    snapshot.players.len(),
                    config.min_players,
                    config.join_fee.0,
                    config.denom
                )));
            }
        }
    }

    if let Some(me) = &app.view.current_player {
        if me.role != Role::Unassigned {
            lines.push(Line::from(format!("Your role: {}", me.role.label())));
        }
    }

    if let Some(eliminated) = &snapshot.last_eliminated {
        lines.push(Line::from(format!("Last eliminated: {eliminated}")));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().title(" Game State ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_logs(f: &mut Frame, app: &App, area: Rect) {
    let frame_height = area.height.saturating_sub(2) as usize; // Subtract borders
    let start_idx = app.logs.len().saturating_sub(frame_height);

    let log_lines: Vec<Line> = app
        .logs
        .iter()
        .skip(start_idx)
        .map(|log| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(log.clone()),
            ])
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .title(" Log ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}
