use crate::error::PromptError;
use crate::ui::events::{EventSource, HostEvent, TerminalEvents};
use crate::ui::table::{PromptCore, Step};
use crate::ui::terminal_guard::setup_terminal;

/// Run a prompt on the real terminal until it is answered.
///
/// The terminal is put in raw mode with the cursor hidden for the duration
/// and restored afterwards, also on error or panic.
pub fn run<C: PromptCore>(core: &mut C) -> Result<C::Answer, PromptError> {
    let guard = setup_terminal()?;
    let mut events = TerminalEvents::new();
    let result = core.redraw().and_then(|()| drive(core, &mut events));
    drop(guard);
    result
}

/// Feed events from `events` to `core` one at a time until a submit is
/// accepted.
///
/// The core never cancels itself: an interrupt or a closed source ends the
/// loop with an error while the core stays active.
pub fn drive<C, E>(core: &mut C, events: &mut E) -> Result<C::Answer, PromptError>
where
    C: PromptCore,
    E: EventSource,
{
    while let Some(event) = events.next_event()? {
        match event {
            HostEvent::Prompt(event) => {
                if let Step::Completed(answer) = core.handle_event(event)? {
                    return Ok(answer);
                }
            }
            HostEvent::Redraw => core.redraw()?,
            HostEvent::Interrupt => {
                tracing::info!("Prompt interrupted by user");
                return Err(PromptError::Interrupted);
            }
        }
    }
    tracing::debug!("Event source closed before the prompt was answered");
    Err(PromptError::InputClosed)
}
