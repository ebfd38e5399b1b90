use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, terminal,
};
use lifegrid::{Grid, Pos2};
use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

pub enum ConsoleCommand {
    Exit,
    Redraw,
    Ignored,
}

/// Full-screen two-color renderer
///
/// The bottom terminal line holds the stats report; arrow keys pan when the
/// grid is larger than the terminal.
pub struct ConsoleRender {
    tl: Pos2,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            tl: Pos2::default(),
            report: String::new(),
        })
    }

    pub fn render(&self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (cols, rows) = (cols as usize, rows.saturating_sub(1) as usize);
        let br = Pos2 {
            row: self.tl.row + rows,
            col: self.tl.col + cols,
        };
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        // raw mode does not return the carriage on '\n', so place each line
        let view = grid.window(self.tl, br).to_string();
        for (y, line) in view.split('\n').enumerate() {
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            stdout.write_all(line.as_bytes())?;
        }

        // mark the grid edges that are on screen
        let edge_col = grid.width() - self.tl.col;
        let edge_row = grid.height() - self.tl.row;
        if edge_col < cols {
            for y in 0..edge_row.min(rows) {
                queue!(stdout, cursor::MoveTo(edge_col as u16, y as u16))?;
                stdout.write_all("│".as_bytes())?;
            }
        }
        if edge_row < rows {
            queue!(stdout, cursor::MoveTo(0, edge_row as u16))?;
            stdout.write_all("─".repeat(edge_col.min(cols)).as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows as u16))?;
        stdout.write_all(self.report.as_bytes())?;

        stdout.flush()
    }

    /// Waits `timeout` while handling key presses, redrawing `grid` after a pan
    ///
    /// Returns early with [`ConsoleCommand::Exit`] if the user asked to quit.
    pub fn wait(&mut self, grid: &Grid, timeout: Duration) -> io::Result<Option<ConsoleCommand>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            match self.handle(event::read()?, grid) {
                ConsoleCommand::Exit => return Ok(Some(ConsoleCommand::Exit)),
                ConsoleCommand::Redraw => self.render(grid)?,
                ConsoleCommand::Ignored => {}
            }
        }
    }

    fn handle(&mut self, ev: Event, grid: &Grid) -> ConsoleCommand {
        match ev {
            // CTRL+C, q or Esc
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => ConsoleCommand::Exit,
            // arrows to move the view, never past the last row or column
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => {
                match code {
                    KeyCode::Up => self.tl.row = self.tl.row.saturating_sub(1),
                    KeyCode::Down => self.tl.row = (self.tl.row + 1).min(grid.height() - 1),
                    KeyCode::Left => self.tl.col = self.tl.col.saturating_sub(1),
                    KeyCode::Right => self.tl.col = (self.tl.col + 1).min(grid.width() - 1),
                    _ => return ConsoleCommand::Ignored,
                }
                ConsoleCommand::Redraw
            }
            Event::Resize(..) => ConsoleCommand::Redraw,
            _ => ConsoleCommand::Ignored,
        }
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // nothing left to report errors to while unwinding the terminal
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
