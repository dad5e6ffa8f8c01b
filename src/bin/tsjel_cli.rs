// src/bin/tsjel_cli.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use tsjel_engine::api::{ApiError, BidResult, ScoreboardViewDto};
use tsjel_engine::domain::{
    all_games, get_game_config, HandType, PlayerIndex, TeamSlot, UnknownHandType,
};
use tsjel_engine::engine::{HandSelection, PointSelection};
use tsjel_engine::i18n::{format_message, translate, Language, MessageKey};
use tsjel_engine::infra::{
    format_timestamp, localized_game_name, localized_hand_type, logging, JsonFileHistoryStore,
    JsonFileStore, UserId,
};
use tsjel_engine::{App, AppConfig};

#[derive(Parser)]
#[command(name = "tsjel_cli")]
#[command(about = "Scorekeeper for Kout, Baloot and Hand")]
struct Args {
    /// Game to open at start (kout, baloot, hand)
    #[arg(long, default_value = "kout")]
    game: String,

    /// Directory for scores and history files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Interface language (en, ar)
    #[arg(long)]
    lang: Option<Language>,

    /// Sign in as this user id
    #[arg(long)]
    user: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

type CliApp = App<JsonFileStore, JsonFileHistoryStore>;

/// Ошибка одной строки REPL: либо ошибка API, либо неверный ввод.
enum CliError {
    Api(ApiError),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Api(err) => write!(f, "{err}"),
            CliError::Usage(usage) => write!(f, "{usage}"),
        }
    }
}

impl std::fmt::Debug for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::Api(err)
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Состояние REPL: приложение, язык, открытая игра и незавершённый выбор.
struct Session {
    app: CliApp,
    language: Language,
    game_id: String,
    points: PointSelection,
    hand: HandSelection,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(lang) = args.lang {
        config.language = lang;
    }

    let store = JsonFileStore::open(config.scores_path())?;
    let history = JsonFileHistoryStore::open(config.history_path())?;
    let mut app = App::with_config(store, history, &config);

    if let Some(user) = args.user {
        app.sign_in(UserId::new(user));
    }

    get_game_config(&args.game).map_err(ApiError::from)?;
    info!(data_dir = %config.data_dir.display(), game = %args.game, "tsjel_cli started");

    let mut session = Session {
        app,
        language: config.language,
        game_id: args.game,
        points: PointSelection::default(),
        hand: HandSelection::default(),
    };

    println!("{}", translate(session.language, MessageKey::AppTitle));
    session.print_games();
    session.show()?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{}> ", session.game_id);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle(line.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(CliError::Api(err)) => println!(
                "{}: {}",
                translate(session.language, MessageKey::Error),
                err.localize(session.language)
            ),
            Err(CliError::Usage(msg)) => println!(
                "{}: {}",
                translate(session.language, MessageKey::InvalidInput),
                msg
            ),
        }
    }

    Ok(())
}

impl Session {
    fn handle(&mut self, line: &str) -> Result<Flow, CliError> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Flow::Continue);
        };
        let rest: Vec<&str> = parts.collect();

        match cmd {
            "games" => self.print_games(),
            "open" => {
                let id = arg(&rest, 0, "open <kout|baloot|hand>")?;
                get_game_config(id).map_err(ApiError::from)?;
                self.game_id = id.to_string();
                self.points.clear();
                self.hand.clear();
                self.show()?;
            }
            "show" => {
                self.show()?;
            }
            "points" => {
                let p = parse_arg::<u32>(&rest, 0, "points <5-9>")?;
                self.points.points = Some(p);
                println!("{}: {p}", translate(self.language, MessageKey::SelectPoints));
            }
            "team" => {
                let slot = parse_team(&rest)?;
                self.points.team = Some(slot);
            }
            "win" => self.apply_points(BidResult::Made)?,
            "lose" => self.apply_points(BidResult::Failed)?,
            "add" => {
                let team1 = rest.first().copied().unwrap_or("");
                let team2 = rest.get(1).copied().unwrap_or("");
                let outcome = self.app.add_round(&self.game_id, team1, team2)?;
                let view = self.show()?;
                if let Some(slot) = outcome.winner {
                    if let Some(team) = view.teams.get(slot.index()) {
                        self.print_winner(&team.name, Some(team.score.value()));
                    }
                }
            }
            "winner" => {
                let player = parse_player(&rest, 0, "winner <0-3>")?;
                self.hand.winner = Some(player);
            }
            "type" => {
                let raw = arg(&rest, 0, "type <handType>")?;
                let hand_type: HandType = raw
                    .parse()
                    .map_err(|e: UnknownHandType| CliError::Usage(e.to_string()))?;
                self.hand.hand_type = Some(hand_type);
                println!("{}", localized_hand_type(self.language, hand_type));
            }
            "nzol" => {
                let player = parse_player(&rest, 0, "nzol <0-3> <value>")?;
                let value = rest.get(1).copied().unwrap_or("");
                if let Some(slot) = self.hand.nzol.get_mut(player) {
                    *slot = value.to_string();
                }
            }
            "record" => {
                let outcome = self.app.record_hand(&self.game_id, &mut self.hand)?;
                println!(
                    "{}: {}",
                    translate(self.language, MessageKey::HandRecorded),
                    format_message(
                        self.language,
                        MessageKey::RoundWonHand,
                        &[
                            ("round", outcome.round.round_number.to_string().as_str()),
                            ("name", outcome.round.winner_name.as_str()),
                            ("handType", localized_hand_type(self.language, outcome.round.hand_type)),
                        ],
                    )
                );
                self.show()?;
                if outcome.game_over {
                    println!("{}", translate(self.language, MessageKey::GameEndedAfterRounds));
                }
            }
            "rename" => {
                let slot = parse_arg::<usize>(&rest, 0, "rename <slot> <name>")?;
                let name = rest.get(1..).map(|words| words.join(" ")).unwrap_or_default();
                if name.is_empty() {
                    return Err(CliError::Usage("rename <slot> <name>".to_string()));
                }
                self.rename(slot, &name)?;
                self.show()?;
            }
            "reset" => {
                self.app.reset(&self.game_id)?;
                self.points.clear();
                self.hand.clear();
                self.show()?;
            }
            "finish" => self.finish()?,
            "history" => self.print_history(),
            "login" => {
                let user = arg(&rest, 0, "login <user id>")?;
                self.app.sign_in(UserId::new(user));
                println!("{} {user}", translate(self.language, MessageKey::SignedInAs));
            }
            "logout" => {
                self.app.sign_out();
                println!("{}", translate(self.language, MessageKey::PlayingAsGuest));
            }
            "lang" => {
                self.language = match rest.first() {
                    Some(code) => code
                        .parse()
                        .map_err(|e: tsjel_engine::i18n::UnknownLanguage| CliError::Usage(e.to_string()))?,
                    None => self.language.toggled(),
                };
                println!("{} ({:?})", self.language, self.language.direction());
            }
            "help" => print_help(),
            "quit" | "exit" => return Ok(Flow::Quit),
            other => return Err(CliError::Usage(format!("unknown command `{other}`, try `help`"))),
        }

        Ok(Flow::Continue)
    }

    fn apply_points(&mut self, result: BidResult) -> Result<(), CliError> {
        let outcome = self.app.apply_points(&self.game_id, &mut self.points, result)?;
        println!("+{} / +{}", outcome.awarded, outcome.opponent_gain);
        self.show()?;
        Ok(())
    }

    fn rename(&mut self, slot: usize, name: &str) -> Result<(), CliError> {
        let hand_mode = matches!(
            self.app.scoreboard(&self.game_id)?,
            tsjel_engine::engine::Scoreboard::Hand(_)
        );

        if hand_mode {
            self.app.rename_player(&self.game_id, slot, name)?;
        } else {
            let team = u8::try_from(slot)
                .ok()
                .and_then(TeamSlot::from_number)
                .ok_or_else(|| CliError::Usage("rename <1|2> <name>".to_string()))?;
            self.app.rename_team(&self.game_id, team, name)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CliError> {
        let finished = self.app.finish_game(&self.game_id)?;
        self.points.clear();
        self.hand.clear();

        println!("{}", translate(self.language, MessageKey::GameOver));
        self.print_winner(&finished.result.winner, None);

        if finished.document_id.is_some() {
            println!("{}", translate(self.language, MessageKey::GameSaved));
        } else if self.app.current_user().is_none() {
            println!("{}", translate(self.language, MessageKey::LoginToSaveGames));
        }

        if finished.offer_interstitial {
            println!("[ad] {}", translate(self.language, MessageKey::InterstitialOffered));
        }
        Ok(())
    }

    fn show(&mut self) -> Result<ScoreboardViewDto, CliError> {
        let view = self.app.view(&self.game_id)?;
        let lang = self.language;
        let config = get_game_config(&self.game_id).map_err(ApiError::from)?;

        println!("== {} ==", localized_game_name(lang, config));

        for team in &view.teams {
            let mark = if team.leading { translate(lang, MessageKey::Leading) } else { "" };
            println!("  [{}] {:<16} {:>6} {mark}", team.slot.number(), team.name, team.score);
        }

        if let (Some(current), Some(max)) = (view.current_round, view.max_rounds) {
            println!("  {} {}/{}", translate(lang, MessageKey::Round), current.min(max), max);
        }
        for player in &view.players {
            let mark = if player.leading { translate(lang, MessageKey::Leading) } else { "" };
            println!(
                "  [{}] #{} {:<16} {:>6} {mark}",
                player.index, player.place, player.name, player.score
            );
        }

        if !view.team_rounds.is_empty() || !view.hand_rounds.is_empty() {
            println!("  {}:", translate(lang, MessageKey::RoundsHistory));
        }
        for round in &view.team_rounds {
            println!("    {}: {} | {}", round.round_number, round.team1_score, round.team2_score);
        }
        for round in &view.hand_rounds {
            let scores: Vec<String> = round.scores.iter().map(|s| s.to_string()).collect();
            println!(
                "    {}: {} ({}) {}",
                round.round_number,
                round.winner_name,
                localized_hand_type(lang, round.hand_type),
                scores.join(" / ")
            );
        }

        if !view.podium.is_empty() {
            println!("  {}:", translate(lang, MessageKey::FinalResults));
            for standing in &view.podium {
                println!("    {}. {} {}", standing.place, standing.name, standing.score);
            }
        }

        Ok(view)
    }

    fn print_games(&self) {
        println!("{}:", translate(self.language, MessageKey::SelectGame));
        for game in all_games() {
            println!(
                "  {:<8} {} – {}",
                game.id,
                localized_game_name(self.language, game),
                game.description
            );
        }
    }

    fn print_winner(&self, name: &str, score: Option<i64>) {
        let text = match score {
            Some(score) => format_message(
                self.language,
                MessageKey::WinsWithScore,
                &[("name", name), ("score", score.to_string().as_str())],
            ),
            None => format_message(self.language, MessageKey::TeamWins, &[("name", name)]),
        };
        println!("{text}");
    }

    fn print_history(&self) {
        let lang = self.language;
        match self.app.current_user() {
            Some(user) => println!("{} {user}", translate(lang, MessageKey::SignedInAs)),
            None => {
                println!("{}", translate(lang, MessageKey::LoginToSaveGames));
                return;
            }
        }

        let games = self.app.history(None);
        if games.is_empty() {
            println!("{}", translate(lang, MessageKey::NoGamesYet));
            return;
        }

        println!("{}:", translate(lang, MessageKey::GameHistory));
        for game in games {
            let name = get_game_config(&game.result.game_type)
                .map(|config| localized_game_name(lang, config))
                .unwrap_or_else(|_| game.result.game_type.clone());
            println!(
                "  {} {:<8} {} ({})",
                format_timestamp(game.result.timestamp),
                name,
                game.result.winner,
                game.id
            );
        }
    }
}

fn arg<'a>(rest: &[&'a str], index: usize, usage: &str) -> Result<&'a str, CliError> {
    rest.get(index)
        .copied()
        .ok_or_else(|| CliError::Usage(usage.to_string()))
}

fn parse_arg<T: std::str::FromStr>(rest: &[&str], index: usize, usage: &str) -> Result<T, CliError> {
    arg(rest, index, usage)?
        .parse()
        .map_err(|_| CliError::Usage(usage.to_string()))
}

fn parse_team(rest: &[&str]) -> Result<TeamSlot, CliError> {
    let usage = "team <1|2>";
    TeamSlot::from_number(parse_arg::<u8>(rest, 0, usage)?)
        .ok_or_else(|| CliError::Usage(usage.to_string()))
}

fn parse_player(rest: &[&str], index: usize, usage: &str) -> Result<PlayerIndex, CliError> {
    parse_arg::<PlayerIndex>(rest, index, usage)
}

fn print_help() {
    println!(
        "\
commands:
  games | open <id> | show
  kout:    points <p> | team <1|2> | win | lose
  baloot:  add <team1> <team2>
  hand:    winner <0-3> | type <handType> | nzol <player> <value> | record
  rename <slot> <name> | reset | finish
  history | login <id> | logout | lang [en|ar]
  help | quit"
    );
}
