use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, ClearType},
};

pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    stdout.flush()
}

pub fn wait_for_keypress() -> io::Result<()> {
    terminal::enable_raw_mode()?;

    let result = (|| -> io::Result<()> {
        // Discard anything typed before the prompt
        while event::poll(Duration::from_millis(10))? {
            event::read()?;
        }
        loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(_) = event::read()? {
                    return Ok(());
                }
            }
        }
    })();

    terminal::disable_raw_mode()?;
    result
}
