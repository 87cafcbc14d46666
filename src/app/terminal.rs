use std::sync::Once;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Guards the one-time panic hook installation.
static PANIC_HOOK: Once = Once::new();

/// What: Enter raw mode and the alternate screen with mouse capture.
///
/// Details:
/// - Mouse capture drives filter focus, buttons, row clicks, and drawer clicks.
/// - Installs a panic hook (once) that restores the terminal before the
///   default hook prints, so a panic message is readable.
pub fn setup_terminal() -> Result<()> {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Undo [`setup_terminal`] and make the cursor visible again.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        std::io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        Show
    )?;
    Ok(())
}
