use crate::tui;
use crate::util::Result;
use crossterm::{cursor, event, terminal, ExecutableCommand, QueueableCommand};
use std::io::Write;

pub struct Term {
    stdout: std::io::Stdout,
    enabled: bool,
}

impl Term {
    pub fn new() -> Result<Term> {
        let mut term = Term {
            stdout: std::io::stdout(),
            enabled: false,
        };
        term.enable()?;
        Ok(term)
    }

    pub fn enable(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.execute(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide {})?;
        self.stdout
            .execute(terminal::Clear(terminal::ClearType::All))?;
        self.enabled = true;
        Ok(())
    }

    pub fn disable(&mut self) -> Result<()> {
        if self.enabled {
            self.stdout.execute(cursor::Show {})?;
            self.stdout.execute(terminal::LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
            self.enabled = false;
        }
        Ok(())
    }

    pub fn event(&mut self, timeout_ms: u64) -> Result<Option<tui::Event>> {
        if event::poll(std::time::Duration::from_millis(timeout_ms))? {
            let event = event::read()?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    // Calls `cb` for the first event that arrives within `timeout_ms` and all events already queued
    pub fn process_events(
        &mut self,
        timeout_ms: u64,
        mut cb: impl FnMut(tui::Event) -> Result<()>,
    ) -> Result<()> {
        let mut timeout_ms = timeout_ms;
        while let Some(event) = self.event(timeout_ms)? {
            cb(event)?;
            timeout_ms = 0;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn region(&self) -> Result<tui::Region> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(tui::Region {
            row: 0,
            col: 0,
            width: width as usize,
            height: height as usize,
        })
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        if let Err(err) = self.disable() {
            log::error!("Could not restore terminal: {err}");
        }
    }
}

impl std::ops::Deref for Term {
    type Target = std::io::Stdout;
    fn deref(&self) -> &Self::Target {
        &self.stdout
    }
}

impl std::ops::DerefMut for Term {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.stdout
    }
}
