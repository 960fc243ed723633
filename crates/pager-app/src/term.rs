//! Interactive terminal loop: raw-mode keys in, draw listings out.
//!
//! Arrow keys map to the pager d-pad, `a` and `b` to the face
//! buttons, `r` reloads the theme from disk, `q` or Escape quits.
//! Raw mode is always restored on the way out.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use pager_core::session::Session;
use pager_core::statusbar::Telemetry;
use pager_store::DiskStore;
use pager_types::input::Button;

use crate::trace::TraceRenderer;

fn key_to_button(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Char('a') => Some(Button::A),
        KeyCode::Char('b') => Some(Button::B),
        KeyCode::Up => Some(Button::Up),
        KeyCode::Down => Some(Button::Down),
        KeyCode::Left => Some(Button::Left),
        KeyCode::Right => Some(Button::Right),
        _ => None,
    }
}

/// Run the interactive loop until the user quits.
pub fn run(session: &mut Session<DiskStore>) -> Result<()> {
    let raw = enable_raw_mode().is_ok();
    let result = event_loop(session);
    if raw {
        let _ = disable_raw_mode();
        println!();
    }
    result
}

fn event_loop(session: &mut Session<DiskStore>) -> Result<()> {
    let telemetry = Telemetry::default();
    draw(session, &telemetry)?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char('r') => {
                if let Err(e) = session.reload() {
                    log::error!("reload failed, keeping the running theme: {e}");
                }
            },
            code => {
                let Some(button) = key_to_button(code) else {
                    continue;
                };
                session.handle_button(button);
            },
        }
        draw(session, &telemetry)?;
    }
    Ok(())
}

fn draw(session: &Session<DiskStore>, telemetry: &Telemetry) -> Result<()> {
    let mut renderer = TraceRenderer::new();
    session.render(&mut renderer, telemetry)?;

    let mut out = io::stdout();
    out.queue(Clear(ClearType::All))?;
    out.queue(MoveTo(0, 0))?;
    let nav = session.nav();
    write!(
        out,
        "{}  [page {}  item {}  depth {}]\r\n",
        nav.current_key(),
        nav.selected_page(),
        nav.selected_item(),
        nav.back_stack_len()
    )?;
    write!(out, "arrows=move  a=select  b=back  r=reload  q=quit\r\n\r\n")?;
    for line in renderer.lines() {
        write!(out, "{line}\r\n")?;
    }
    out.flush()?;
    Ok(())
}
