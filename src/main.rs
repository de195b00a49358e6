use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color as TermColor, PrintStyledContent},
    QueueableCommand,
};
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};

use connect4_engine::*;

fn main() -> Result<()> {
    // logs go to stderr so they stay out of the board drawing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut game = Connect4::new(MemorySink::new());
    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    display(&game)?;

    // game loop
    loop {
        let turn = game.get_next_turn();
        print!("{} to move, column input > ", turn.name());
        stdout().flush()?;

        let mut input_str = String::new();
        if stdin.read_line(&mut input_str)? == 0 {
            println!();
            break;
        }

        let column = match input_str.trim().parse::<usize>() {
            Err(_) => {
                println!("Invalid number: {}", input_str.trim());
                continue;
            }
            Ok(column) => column,
        };

        if let Err(err) = game.insert_disc(column) {
            println!("{}", err);
            // try the move again
            continue;
        }
        display(&game)?;

        // end states
        match game.winner() {
            Winner::Red => {
                println!("Red wins!");
                break;
            }
            Winner::Green => {
                println!("Green wins!");
                break;
            }
            Winner::Nobody if game.is_finished() => {
                println!("Draw!");
                break;
            }
            Winner::Nobody => {}
        }
    }
    Ok(())
}

fn display<S: OutputSink>(game: &Connect4<S>) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=COLUMNS).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    for row in (0..ROWS).rev() {
        for column in 0..COLUMNS {
            let cell = game.cell(row, column).unwrap_or(Color::Empty);
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(TermColor::DarkBlue)
                    .with(match cell {
                        Color::Red => TermColor::Red,
                        Color::Green => TermColor::Green,
                        Color::Empty => TermColor::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
