use crate::ctrl;

pub struct Line {
    pub mode: ctrl::Mode,
    pub message: String,
    pub timed_messages: Vec<TimedMessage>,
}

pub struct TimedMessage {
    pub timeout: std::time::Instant,
    pub message: String,
}

impl Line {
    pub fn new() -> Line {
        Line {
            mode: ctrl::Mode::Normal,
            message: String::new(),
            timed_messages: Vec::new(),
        }
    }

    pub fn set_timed_message(&mut self, message: impl Into<String>, duration_ms: u64) {
        self.timed_messages.clear();
        self.add_timed_message(message, duration_ms);
    }

    pub fn add_timed_message(&mut self, message: impl Into<String>, duration_ms: u64) {
        self.timed_messages.push(TimedMessage {
            timeout: std::time::Instant::now() + std::time::Duration::from_millis(duration_ms),
            message: message.into(),
        });
    }

    // The most recent timed message that did not expire yet, else the plain message
    pub fn message(&mut self) -> &str {
        let now = std::time::Instant::now();
        self.timed_messages.retain(|tm| tm.timeout > now);
        match self.timed_messages.last() {
            Some(tm) => tm.message.as_str(),
            None => self.message.as_str(),
        }
    }
}

impl Default for Line {
    fn default() -> Line {
        Line::new()
    }
}
