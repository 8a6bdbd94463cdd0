//! Terminal demo: watch the search expand one tile per frame.
//!
//! Run: cargo run --bin hexpath

use std::io;
use std::thread;
use std::time::Duration;

use crossterm::{cursor, execute, terminal};
use hexgrid_demos::Demo;
use hexgrid_paths::Step;

const SEARCHES: usize = 5;
const FRAME: Duration = Duration::from_millis(16);
const PAUSE: Duration = Duration::from_millis(1200);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let mut demo = Demo::new(seed);
    let mut stdout = io::stdout();

    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;

    let result = run(&mut demo, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    result?;
    println!("{}", demo.status());
    Ok(())
}

fn run(demo: &mut Demo, stdout: &mut io::Stdout) -> Result<(), Box<dyn std::error::Error>> {
    for _ in 0..SEARCHES {
        if demo.restart()?.is_none() {
            break;
        }
        demo.render(stdout)?;
        while let Step::Expanded(_) | Step::Found(_) = demo.tick() {
            demo.render(stdout)?;
            thread::sleep(FRAME);
        }
        demo.render(stdout)?;
        thread::sleep(PAUSE);
    }
    Ok(())
}
