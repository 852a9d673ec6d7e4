use std::env;
use std::io::{self, Write};
use std::process;

use clap::{App, Arg};
use log::debug;

use slide_puzzle_solver::config::{BoardConfig, MAX_FILE_LEN};
use slide_puzzle_solver::solver::heuristic::manhattan;
use slide_puzzle_solver::solver::Solution;
use slide_puzzle_solver::state::BoardState;
use slide_puzzle_solver::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("slide-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest solution of the 8-puzzle using A*")
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("progress")
                .short("p")
                .long("progress")
                .help("print status while searching"),
        )
        .arg(Arg::with_name("file").help("file with the start board, asks if missing"))
        .get_matches();

    let path = match matches.value_of("file") {
        Some(path) => path.to_string(),
        None => prompt_path().unwrap_or_else(|err| {
            println!("Can't read file name: {}", err);
            process::exit(1);
        }),
    };

    let config = BoardConfig::default();
    let board = path.load_board(config.board_size()).unwrap_or_else(|err| {
        let current_dir = env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();
        println!("Can't load board {} in {}: {}", path, current_dir, err);
        process::exit(1);
    });
    debug!("Loaded board {:?}", board);

    let solver_ok = board
        .solve(&config, matches.is_present("progress"))
        .unwrap_or_else(|err| {
            println!("Failed to solve: {}", err);
            process::exit(1);
        });

    match solver_ok.solution {
        Solution::Solved(ref path) => {
            println!("Found solution:");
            print!("{}", path.format());
        }
        Solution::Unsolvable => {
            let h = manhattan(&board, config.goal_layout());
            print!("{}", BoardState::new(board, 0, h).format());
            println!("Unsolvable");
        }
    }

    if matches.is_present("stats") {
        println!();
        print!("{}", solver_ok.stats);
    }
}

fn prompt_path() -> io::Result<String> {
    print!("Name of your input file ({} characters max): ", MAX_FILE_LEN);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().chars().take(MAX_FILE_LEN).collect())
}
