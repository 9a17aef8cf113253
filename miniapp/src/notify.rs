//! User-facing notices.
//!
//! The core only needs one capability from its host: show a dismissable
//! message. Hosts pick how (Telegram popup, toast, terminal line).

use std::fmt;
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A dismissable message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: String::new(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.title, self.message)
        }
    }
}

/// Capability to show a dismissable message.
pub trait Notifier: Send + Sync {
    fn show(&self, notice: Notice);
}

/// Forwards notices over a channel to the host's UI loop.
#[derive(Clone)]
pub struct ChannelNotifier {
    tx: Sender<Notice>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<Notice>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn show(&self, notice: Notice) {
        if let Err(e) = self.tx.send(notice) {
            log::error!("Failed to send notice: {e}");
        }
    }
}

/// Prints notices to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn show(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => println!("{notice}"),
            NoticeLevel::Warning => eprintln!("warning: {notice}"),
            NoticeLevel::Error => eprintln!("error: {notice}"),
        }
    }
}
