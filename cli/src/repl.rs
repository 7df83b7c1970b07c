use std::io::{BufRead, Write};

use sapador_core::{Coord, GridConfig};

use crate::position::parse_position;
use crate::render::render_board;
use crate::session::{RevealOutcome, Session};

const NOT_STARTED: &str = "Game is not started.";
const POSITION_NO_OP: &str = "Position is already visible or is out of range.";
const POSITION_FORMAT: &str =
    "You have to specify column as a latin letter and row as an integer after this command";

const HELP_TEXT: &str = "\
Welcome to Minesweeper Game!
The goal of the game is to uncover all cells that do not contain mines.
Flag cells to mark suspected mines. If you reveal a mine by mistake,
the game is over!

--------------------------
     Commands Overview
--------------------------

- start or s [difficulty]
    Starts a new game with a preset difficulty.
    Difficulty Levels:
      easy   - 8x8 grid, 10 mines
      normal - 16x16 grid, 40 mines
      hard   - 24x24 grid, 99 mines
    Example: start easy

- start or s [width] [height] [mines]
    Starts a new game with custom grid dimensions and mine count.
    Example: start 10 10 20

- display or d
    Displays the current game field.
    Example: display

- flag or f [position]
    Flags a cell you suspect contains a mine.
    Example: flag B3 or f 3B or f 3 b

- hit or h or disclose or reveal or r [position]
    Reveals the cell at the specified position.
    Example: reveal B3 or h 3B or h 3 b

- end or e
    Ends the current game without determining win/loss.
    Example: end

- quit or q or exit
    Quits Minesweeper game entirely.
    Example: quit

- help or ?
    Displays this help menu.
    Example: help

--------------------------
   Position Format
--------------------------

Specify cell positions in one of the following formats:
   [letter][number]    Example: B3
   [number][letter]    Example: 3B
   [letter] [number]   Example: B 3
   [number] [letter]   Example: 3 B

   The letter represents the column, and the number represents the row.
   Also the game is case-insensitive, so 3b and 3B are treated as same.

--------------------------
   How to Play
--------------------------

1. OBJECTIVE:
   Uncover all cells that do not contain mines without revealing a mine.
   The game ends if you reveal a mine.

2. REVEALING CELLS:
   Start the game by revealing a cell. If a cell has no adjacent mines,
   nearby cells will automatically reveal. If a cell displays a number,
   it indicates how many mines are adjacent to it. Use this info to deduce
   safe cells.

3. FLAGGING MINES:
   Use the 'flag' command to mark cells where you suspect a mine. This
   helps keep track of possible mine locations.

4. WINNING AND LOSING:
   WIN by revealing all non-mine cells.
   LOSE if you reveal a cell containing a mine.

5. ENDING AND EXITING:
   Use 'end' to abandon the current game.
   Use 'quit' to leave Minesweeper entirely.

Good luck!";

/// Drives the command loop until `quit` or end of input. Each started game
/// consumes one seed value, so a fixed base seed replays exactly.
pub(crate) fn run(
    mut input: impl BufRead,
    output: &mut impl Write,
    base_seed: u64,
) -> anyhow::Result<()> {
    writeln!(output, "Welcome to Minesweeper game!")?;
    writeln!(output, "Type help or ? for help menu and instructions.")?;

    let mut session: Option<Session> = None;
    let mut next_seed = base_seed;

    loop {
        write!(output, ">>> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.to_lowercase();
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["quit" | "q" | "exit"] => break,
            ["start" | "s", "easy"] => {
                command_start(output, GridConfig::easy(), &mut session, &mut next_seed)?;
            }
            ["start" | "s", "normal"] => {
                command_start(output, GridConfig::normal(), &mut session, &mut next_seed)?;
            }
            ["start" | "s", "hard"] => {
                command_start(output, GridConfig::hard(), &mut session, &mut next_seed)?;
            }
            ["start" | "s", width, height, mines] => {
                command_start_custom(
                    output,
                    [*width, *height, *mines],
                    &mut session,
                    &mut next_seed,
                )?;
            }
            ["flag" | "f", argument @ ..] => command_flag(output, argument, &mut session)?,
            ["hit" | "h" | "disclose" | "reveal" | "r", argument @ ..] => {
                command_hit(output, argument, &mut session)?;
            }
            ["end" | "e"] => command_end(output, &mut session)?,
            ["display" | "d"] => command_display(output, &session)?,
            ["help" | "?"] => writeln!(output, "{HELP_TEXT}")?,
            [] => {}
            _ => writeln!(
                output,
                "Invalid command or arguments, please, type help for instructions."
            )?,
        }
    }

    writeln!(output, "Thank you for playing. Goodbye!")?;
    Ok(())
}

fn print_board(output: &mut impl Write, session: &Session) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "{}",
        render_board(session.config(), session.grid(), session.flags())
    )
}

fn command_start(
    output: &mut impl Write,
    config: GridConfig,
    session: &mut Option<Session>,
    next_seed: &mut u64,
) -> std::io::Result<()> {
    let seed = *next_seed;
    *next_seed = next_seed.wrapping_add(1);
    log::debug!(
        "starting {}x{} game with {} mines, seed {}",
        config.size.0,
        config.size.1,
        config.mines,
        seed
    );

    let started = Session::new(config, seed);
    writeln!(output, "Game started. There are {} mines.", config.mines)?;
    writeln!(output, "Good luck!")?;
    print_board(output, &started)?;
    *session = Some(started);
    Ok(())
}

fn command_start_custom(
    output: &mut impl Write,
    [width, height, mines]: [&str; 3],
    session: &mut Option<Session>,
    next_seed: &mut u64,
) -> std::io::Result<()> {
    let (Ok(width), Ok(height), Ok(mines)) = (
        width.parse::<i64>(),
        height.parse::<i64>(),
        mines.parse::<i64>(),
    ) else {
        return writeln!(
            output,
            "Width, height and number of mines must be all integers."
        );
    };

    if !(4..=26).contains(&width) || !(4..=26).contains(&height) {
        return writeln!(output, "Width and height have to be between 4 and 26");
    }

    let max_mines = width * height - 9;
    if !(1..=max_mines).contains(&mines) {
        return writeln!(output, "Mines number has to be between 1 and {max_mines}");
    }

    let config = GridConfig::new_unchecked((width as Coord, height as Coord), mines as u16);
    command_start(output, config, session, next_seed)
}

fn command_flag(
    output: &mut impl Write,
    argument: &[&str],
    session: &mut Option<Session>,
) -> std::io::Result<()> {
    let Some(session) = session.as_mut() else {
        return writeln!(output, "{NOT_STARTED}");
    };

    let Some(position) = parse_position(argument) else {
        return writeln!(output, "{POSITION_FORMAT}");
    };

    if session.toggle_flag(position) {
        print_board(output, session)
    } else {
        writeln!(output, "{POSITION_NO_OP}")
    }
}

fn command_hit(
    output: &mut impl Write,
    argument: &[&str],
    session_slot: &mut Option<Session>,
) -> std::io::Result<()> {
    let Some(session) = session_slot.as_mut() else {
        return writeln!(output, "{NOT_STARTED}");
    };

    let Some(position) = parse_position(argument) else {
        return writeln!(output, "{POSITION_FORMAT}");
    };

    match session.reveal(position) {
        RevealOutcome::Rejected => writeln!(output, "{POSITION_NO_OP}")?,
        RevealOutcome::Continued => print_board(output, session)?,
        RevealOutcome::Lost => {
            writeln!(output, "Unfortunately, you hit a mine.")?;
            print_board(output, session)?;
            *session_slot = None;
        }
        RevealOutcome::Won => {
            writeln!(output, "Congratulations! You won, good job!")?;
            print_board(output, session)?;
            *session_slot = None;
        }
    }
    Ok(())
}

fn command_end(
    output: &mut impl Write,
    session_slot: &mut Option<Session>,
) -> std::io::Result<()> {
    let Some(session) = session_slot.as_mut() else {
        return writeln!(output, "{NOT_STARTED}");
    };

    session.finish();
    print_board(output, session)?;
    *session_slot = None;
    Ok(())
}

fn command_display(output: &mut impl Write, session: &Option<Session>) -> std::io::Result<()> {
    match session {
        Some(session) => print_board(output, session),
        None => writeln!(output, "{NOT_STARTED}"),
    }
}
