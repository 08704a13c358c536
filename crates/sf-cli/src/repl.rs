//! Interactive read-eval-print loop around a [`GameSession`].

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use sf_core::{CharacterClass, GameState, StoryLine};
use sf_narrator::Narrator;
use sf_session::{FileStore, GameSession, SessionConfig};

type Session = GameSession<Narrator, FileStore>;

pub async fn run(save_dir: &Path, seed: u64, delay_ms: u64) -> Result<(), String> {
    let store =
        FileStore::new(save_dir).map_err(|e| format!("cannot open save directory: {e}"))?;
    let config = SessionConfig::default()
        .with_seed(seed)
        .with_delay(Duration::from_millis(delay_ms));
    let mut session = GameSession::new(Narrator::new(config.seed), store, config);

    println!("  {} StoryForge", "Welcome to".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    if session.has_save() && prompt_yes_no(&mut reader, "A saved game exists. Continue it?")? {
        if let Err(e) = session.load() {
            println!("{}\n", format!("could not load save: {e}").yellow());
        }
    }

    if !session.state().has_character() && !create_character(&mut reader, &mut session)? {
        return Ok(()); // EOF during creation
    }

    let mut printed = 0;
    print_new_story(&session, &mut printed);

    loop {
        let Some(input) = read_line(&mut reader, "> ")? else {
            break;
        };
        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "h" => print_help(),
            "sheet" => print_sheet(session.state()),
            "inventory" | "i" => print_inventory(session.state()),
            "events" => print_events(session.state()),
            "save" => match session.save() {
                Ok(()) => println!("{}\n", "Game saved.".green()),
                Err(e) => println!("{}\n", format!("could not save: {e}").yellow()),
            },
            "load" => match session.load() {
                Ok(()) => {
                    printed = 0; // replay the restored story from the top
                    println!("{}\n", "Game loaded.".green());
                    print_new_story(&session, &mut printed);
                }
                Err(e) => println!("{}\n", format!("could not load: {e}").yellow()),
            },
            "reset" => {
                session.reset();
                printed = 0;
                println!("The tale begins anew.\n");
                if !create_character(&mut reader, &mut session)? {
                    break;
                }
                print_new_story(&session, &mut printed);
            }
            _ => match session.submit_action(&input).await {
                Ok(()) => print_new_story(&session, &mut printed),
                Err(e) => println!("{}\n", e.to_string().yellow()),
            },
        }
    }

    Ok(())
}

/// Prompt for a name and class until a character is created.
///
/// Returns `false` when stdin is exhausted before creation finishes.
fn create_character(reader: &mut impl BufRead, session: &mut Session) -> Result<bool, String> {
    let classes = CharacterClass::all()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    loop {
        let Some(name) = read_line(reader, "Name your hero: ")? else {
            return Ok(false);
        };

        let class = loop {
            let Some(input) = read_line(reader, &format!("Choose a class ({classes}): "))? else {
                return Ok(false);
            };
            match CharacterClass::parse(&input) {
                Ok(class) => break class,
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        };

        match session.create_character(&name, class) {
            Ok(()) => return Ok(true),
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }
}

/// Print a prompt and read one trimmed line. `None` means EOF.
fn read_line(reader: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

fn prompt_yes_no(reader: &mut impl BufRead, question: &str) -> Result<bool, String> {
    match read_line(reader, &format!("{question} [y/N] "))? {
        Some(answer) => Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}

/// Print story lines appended since the last call.
fn print_new_story(session: &Session, printed: &mut usize) {
    let story = &session.state().story;
    for line in &story[*printed..] {
        match line {
            StoryLine::Player(text) => println!("{}", format!("> {text}").dimmed()),
            StoryLine::Narration(text) => println!("{text}"),
        }
        println!();
    }
    *printed = story.len();
}

fn print_help() {
    println!("  sheet      show your character sheet");
    println!("  inventory  list carried items");
    println!("  events     list recent events");
    println!("  save       save the game");
    println!("  load       restore the saved game");
    println!("  reset      abandon this tale and start over");
    println!("  quit       leave the game");
    println!("  Anything else is an action for the narrator.\n");
}

fn print_sheet(state: &GameState) {
    let Some(character) = &state.character else {
        println!("{}\n", "No character yet.".yellow());
        return;
    };
    println!(
        "  {} the {}, at {}",
        character.name.bold(),
        character.class,
        state.location
    );
    let stats = &character.stats;
    println!(
        "  STR {}  DEX {}  INT {}  CHA {}\n",
        stats.strength, stats.dexterity, stats.intelligence, stats.charisma
    );
}

fn print_inventory(state: &GameState) {
    if state.inventory.is_empty() {
        println!("  You carry nothing.\n");
        return;
    }
    for item in &state.inventory {
        println!("  - {item}");
    }
    println!();
}

fn print_events(state: &GameState) {
    if state.recent_events.is_empty() {
        println!("  Nothing noteworthy has happened yet.\n");
        return;
    }
    for event in state.recent_events.entries() {
        println!("  - {event}");
    }
    println!();
}
