use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Discrete inputs the prompt reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    Up,
    Down,
    Space,
    Submit,
}

/// Events delivered by the host to the prompt runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Prompt(PromptEvent),
    /// Terminal size changed; repaint the current frame.
    Redraw,
    /// User pressed Ctrl+C.
    Interrupt,
}

impl From<PromptEvent> for HostEvent {
    fn from(event: PromptEvent) -> Self {
        HostEvent::Prompt(event)
    }
}

/// Ordered stream of host events. `Ok(None)` means the source is closed.
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Option<HostEvent>>;
}

/// Map a terminal key press to a host event.
///
/// Up: `Up`, `k`, `Ctrl+P`. Down: `Down`, `j`, `Ctrl+N`. Select: space.
/// Submit: `Enter`. Anything else, and non-press events, map to `None`.
pub fn map_key(key: KeyEvent) -> Option<HostEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c') => Some(HostEvent::Interrupt),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'p') => Some(PromptEvent::Up.into()),
            KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'n') => Some(PromptEvent::Down.into()),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Up | KeyCode::Char('k') => PromptEvent::Up,
        KeyCode::Down | KeyCode::Char('j') => PromptEvent::Down,
        KeyCode::Char(' ') => PromptEvent::Space,
        KeyCode::Enter => PromptEvent::Submit,
        _ => return None,
    };
    Some(event.into())
}

/// Blocking reader over the real terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Option<HostEvent>> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(mapped) = map_key(key) {
                        return Ok(Some(mapped));
                    }
                }
                Event::Resize(_, _) => return Ok(Some(HostEvent::Redraw)),
                _ => {}
            }
        }
    }
}

/// Fixed queue of events, closed once drained.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    queue: VecDeque<HostEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = HostEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl FromIterator<PromptEvent> for ScriptedEvents {
    fn from_iter<T: IntoIterator<Item = PromptEvent>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(HostEvent::from))
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Option<HostEvent>> {
        Ok(self.queue.pop_front())
    }
}
