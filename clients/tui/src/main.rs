use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::sync::{Arc, Mutex};
use std::{error::Error, io};
use twentyone::{Participant, RoundOutcome};

mod logger;
use logger::PanelLogger;

mod table;
use table::{parse_bet, Table};

#[derive(Parser)]
#[command(name = "twentyone-tui", about = "Single-player blackjack at the terminal")]
struct Cli {
    /// Seed the shuffle for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq)]
enum Phase {
    NameEntry,
    Betting,
    PlayerTurn,
    DealerTurn,
    RoundOver,
    Broke,
}

struct App {
    table: Option<Table>,
    phase: Phase,
    input: String, // Buffer for typed name and bet entry
    status: String,
    logs: Vec<String>,
    log_buffer: Arc<Mutex<Vec<String>>>, // Shared buffer for capturing log:: messages
    last_outcome: Option<RoundOutcome>,
    seed: Option<u64>,
}

impl App {
    fn new(seed: Option<u64>, log_buffer: Arc<Mutex<Vec<String>>>) -> App {
        App {
            table: None,
            phase: Phase::NameEntry,
            input: String::new(),
            status: "Type your name and press Enter.".to_string(),
            logs: vec![
                "Welcome to Twenty-One!".to_string(),
                "Wins pay even money and the dealer stands on every 17.".to_string(),
                "[Esc] leaves the table at any time.".to_string(),
            ],
            log_buffer,
            last_outcome: None,
            seed,
        }
    }

    fn sync_logs(&mut self) {
        // Pull any new log messages from the shared buffer
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

    /// Phases that read typed text rather than single-key commands.
    fn typing(&self) -> bool {
        matches!(self.phase, Phase::NameEntry | Phase::Betting)
    }

    fn submit_input(&mut self) {
        match self.phase {
            Phase::NameEntry => self.start_session(),
            Phase::Betting => self.submit_bet(),
            _ => {}
        }
    }

    fn start_session(&mut self) {
        let trimmed = self.input.trim();
        let name = if trimmed.is_empty() {
            "Player".to_string()
        } else {
            trimmed.to_string()
        };
        self.input.clear();

        let table = Table::new(&name, self.seed);
        let chips = table.player.chips();
        self.table = Some(table);

        self.add_log(format!("Welcome, {name}! You have {chips} chips."));
        self.status = format!("Chips: {chips}. Type your bet and press Enter.");
        self.phase = Phase::Betting;
    }

    fn submit_bet(&mut self) {
        let amount = match parse_bet(&self.input) {
            Some(amount) => amount,
            None => {
                self.input.clear();
                self.status = "Bets are whole numbers. Type one and press Enter.".to_string();
                return;
            }
        };
        self.input.clear();

        let (placed, chips) = match self.table.as_mut() {
            Some(table) => (table.player.place_bet(amount), table.player.chips()),
            None => return,
        };

        if placed {
            self.deal_round();
        } else {
            self.status = format!("A bet needs to be between 1 and {chips} chips.");
        }
    }

    fn deal_round(&mut self) {
        let (bet, player_hand, dealer_shown) = match self.table.as_mut() {
            Some(table) => {
                table.deal_initial();
                (
                    table.player.bet(),
                    table.player.hand().to_string(),
                    table.dealer.show_hand(),
                )
            }
            None => return,
        };

        self.add_log(format!("You bet {bet} chips."));
        self.add_log(format!("Your hand: {player_hand}"));
        self.add_log(format!("Dealer shows: {dealer_shown}"));
        self.status = "[H]it or [S]tand?".to_string();
        self.phase = Phase::PlayerTurn;
    }

    fn player_hit(&mut self) {
        let (card, total, bust) = match self.table.as_mut() {
            Some(table) => {
                let card = table.player.hit(&mut table.deck);
                (card, table.player.total(), table.player.is_bust())
            }
            None => return,
        };

        self.add_log(format!("You draw {card}"));
        if bust {
            self.add_log(format!("Bust with {total}!"));
            self.finish_round();
        } else {
            self.add_log(format!("You have {total}"));
        }
    }

    fn player_stand(&mut self) {
        let total = match self.table.as_ref() {
            Some(table) => table.player.total(),
            None => return,
        };
        self.add_log(format!("You stand with {total}"));
        self.phase = Phase::DealerTurn;
        self.finish_round();
    }

    fn finish_round(&mut self) {
        // Dealer resolves first; a busted player skips this entirely.
        let dealer_play = match self.table.as_mut() {
            Some(table) => {
                let hole = table.dealer.hand().cards().first().copied();
                let already_dealt = table.dealer.hand().len();
                table.play_dealer();
                if table.dealer.is_revealed() {
                    let drawn = table.dealer.hand().cards()[already_dealt..].to_vec();
                    Some((hole, drawn, table.dealer.total(), table.dealer.is_bust()))
                } else {
                    None
                }
            }
            None => return,
        };

        if let Some((hole, drawn, dealer_total, dealer_bust)) = dealer_play {
            if let Some(card) = hole {
                self.add_log(format!("Dealer reveals {card}"));
            }
            for card in drawn {
                self.add_log(format!("Dealer draws {card}"));
            }
            if dealer_bust {
                self.add_log(format!("Dealer busts with {dealer_total}!"));
            } else {
                self.add_log(format!("Dealer stands with {dealer_total}"));
            }
        }

        let (outcome, bet, chips) = match self.table.as_mut() {
            Some(table) => {
                let bet = table.player.bet();
                let outcome = table.settle_bets();
                (outcome, bet, table.player.chips())
            }
            None => return,
        };

        match outcome {
            RoundOutcome::Win => self.add_log(format!("You win {bet} chips!")),
            RoundOutcome::Loss => self.add_log(format!("You lose {bet} chips.")),
            RoundOutcome::Push => self.add_log(format!("Push. Your {bet} chips come back.")),
        }
        self.last_outcome = Some(outcome);

        if chips == 0 {
            self.add_log("You're out of chips.".to_string());
            self.status = "Out of chips! Press any key to leave the table.".to_string();
            self.phase = Phase::Broke;
        } else {
            self.status = format!("Chips: {chips}. Play again? [Y]es, any other key leaves.");
            self.phase = Phase::RoundOver;
        }
    }

    fn next_round(&mut self) {
        let chips = match self.table.as_mut() {
            Some(table) => {
                table.next_round();
                table.player.chips()
            }
            None => return,
        };

        self.last_outcome = None;
        self.add_log("--- New round ---".to_string());
        self.status = format!("Chips: {chips}. Type your bet and press Enter.");
        self.input.clear();
        self.phase = Phase::Betting;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Initialize custom logger
    let log_buffer = PanelLogger::install();

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let app = App::new(cli.seed, log_buffer);
    let res = run_app(&mut terminal, app);

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

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<(), Box<dyn Error>>
where
    B::Error: 'static,
{
    loop {
        // Sync any new log messages from the logger
        app.sync_logs();

        terminal.draw(|f| ui(f, &app))?;

        // Poll with a timeout so the UI can refresh between key presses
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('h') | KeyCode::Char('H') if app.phase == Phase::PlayerTurn => {
                        app.player_hit();
                    }
                    KeyCode::Char('s') | KeyCode::Char('S') if app.phase == Phase::PlayerTurn => {
                        app.player_stand();
                    }
                    KeyCode::Char('y') | KeyCode::Char('Y') if app.phase == Phase::RoundOver => {
                        app.next_round();
                    }
                    _ if matches!(app.phase, Phase::RoundOver | Phase::Broke) => {
                        // Any other key leaves the table
                        return Ok(());
                    }
                    KeyCode::Char(c) if app.typing() => {
                        app.input.push(c);
                    }
                    KeyCode::Backspace if app.typing() => {
                        app.input.pop();
                    }
                    KeyCode::Enter if app.typing() => {
                        app.submit_input();
                    }
                    KeyCode::Esc => {
                        return Ok(());
                    }
                    _ => {} // Unrecognized keys fall through; the phase re-prompts itself
                }
            }
        }
    }
}

fn card_span(card_str: String) -> Span<'static> {
    let color = match card_str.chars().last() {
        Some('♥') => Color::Red,
        Some('♦') => Color::from_u32(0xFF_A5_00), // Orange
        Some('♣') => Color::Magenta,              // Purple
        Some('♠') => Color::Black,
        _ => Color::White,
    };
    Span::styled(format!("{card_str} "), Style::default().fg(color).bg(Color::Gray))
}

fn ui(f: &mut Frame, app: &App) {
    // Main layout: title, table area, status bar
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

    let title_text = if app.seed.is_some() {
        "Twenty-One - Seeded Table"
    } else {
        "Twenty-One - Console Blackjack"
    };
    let title = Paragraph::new(title_text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    // Split the table area: game on the left, log panel on the right
    let main_horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
        .split(main_chunks[1]);

    // Dealer on top, player below
    let game_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(main_horizontal[0]);

    let (dealer_cells, dealer_title) = match app.table.as_ref() {
        Some(table) => {
            let hidden = !table.dealer.is_revealed();
            let cells: Vec<Span> = table
                .dealer
                .hand()
                .cards()
                .iter()
                .enumerate()
                .map(|(idx, card)| {
                    // The hole card is the first one dealt
                    let card_str = if hidden && idx == 0 {
                        "??".to_string()
                    } else {
                        card.to_display()
                    };
                    card_span(card_str)
                })
                .collect();
            let title = if table.dealer.is_revealed() {
                format!(" Dealer ({}) ", table.dealer.total())
            } else {
                " Dealer ".to_string()
            };
            (cells, title)
        }
        None => (vec![Span::raw("Waiting for a player")], " Dealer ".to_string()),
    };

    let dealer_height = game_area[0].height.saturating_sub(2);
    let mut dealer_lines: Vec<Line> = vec![Line::from(""); (dealer_height / 2) as usize];
    dealer_lines.push(Line::from(dealer_cells));

    let dealer_block = Paragraph::new(dealer_lines)
        .block(Block::default().title(dealer_title).borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(dealer_block, game_area[0]);

    let (player_cells, player_title, chips_line) = match app.table.as_ref() {
        Some(table) => {
            let cells: Vec<Span> = table
                .player
                .hand()
                .cards()
                .iter()
                .map(|card| card_span(card.to_display()))
                .collect();
            let title = if table.player.hand().is_empty() {
                format!(" {} ", table.player.name())
            } else {
                format!(" {} ({}) ", table.player.name(), table.player.total())
            };
            let chips_line = format!(
                "Chips: {}   Bet: {}",
                table.player.chips(),
                table.player.bet()
            );
            (cells, title, chips_line)
        }
        None => (
            vec![Span::raw("Waiting for a player")],
            " Player ".to_string(),
            String::new(),
        ),
    };

    // Highlight the player's border while it is their move, then color
    // it by the round's outcome
    let player_border = if app.phase == Phase::PlayerTurn {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if matches!(app.phase, Phase::RoundOver | Phase::Broke) {
        match app.last_outcome {
            Some(RoundOutcome::Win) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            Some(RoundOutcome::Loss) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Some(RoundOutcome::Push) => Style::default().fg(Color::DarkGray),
            None => Style::default(),
        }
    } else {
        Style::default()
    };

    let player_height = game_area[1].height.saturating_sub(2);
    let padding = (player_height.saturating_sub(3) / 2) as usize;
    let mut player_lines: Vec<Line> = vec![Line::from(""); padding];
    player_lines.push(Line::from(player_cells));
    player_lines.push(Line::from(""));
    player_lines.push(Line::from(chips_line));

    let player_block = Paragraph::new(player_lines)
        .block(
            Block::default()
                .title(player_title)
                .borders(Borders::ALL)
                .border_style(player_border),
        )
        .alignment(Alignment::Center);
    f.render_widget(player_block, game_area[1]);

    // Log panel
    let log_area = main_horizontal[1];
    let log_frame_height = log_area.height.saturating_sub(2) as usize;
    let log_start_idx = app.logs.len().saturating_sub(log_frame_height);

    let log_lines: Vec<Line> = app
        .logs
        .iter()
        .skip(log_start_idx)
        .map(|log| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(log.clone()),
            ])
        })
        .collect();

    let logs_widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .title(" Game Log ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_widget, log_area);

    // Status bar at bottom, echoing the input buffer while typing
    let status_text = if app.typing() && !app.input.is_empty() {
        format!("{} > {}", app.status, app.input)
    } else {
        app.status.clone()
    };

    let status_bar = Paragraph::new(status_text)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_bar, main_chunks[2]);
}
