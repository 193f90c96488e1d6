//! Scroll Reveal Demo - animated text in a terminal.
//!
//! Scroll the mouse wheel to move a synthetic page offset past the
//! threshold and watch the glyphs reveal left to right; scroll back up
//! to reverse them out. A tiny time-stepped engine stands in for a real
//! interpolator: a glyph appears once its stagger delay has elapsed.
//!
//! Run with: cargo run --example scroll_reveal
//! Quit with: q or Esc

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};

use animated_text::{
    animated_text, AnimatedTextHandle, AnimatedTextProps, AnimationEngine, AnimationState,
    ScrollHost, Slot, TerminalHost, VariantSet,
};

/// Demo engine: records each slot's target and retarget time, and
/// resolves "has this glyph's delay elapsed yet" at draw time.
struct RevealEngine {
    container: RefCell<AnimationState>,
    glyphs: RefCell<HashMap<usize, (AnimationState, f32, Instant)>>,
}

impl RevealEngine {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            container: RefCell::new(AnimationState::Hidden),
            glyphs: RefCell::new(HashMap::new()),
        })
    }

    /// Whether glyph `i` should currently be drawn.
    fn is_shown(&self, i: usize) -> bool {
        if !self.container.borrow().is_visible() {
            return false;
        }
        match self.glyphs.borrow().get(&i) {
            Some(&(state, delay, since)) => {
                state.is_visible() && since.elapsed().as_secs_f32() >= delay
            }
            None => false,
        }
    }
}

impl AnimationEngine for RevealEngine {
    fn animate(&self, slot: Slot, _variants: &VariantSet, state: AnimationState, delay: f32) {
        match slot {
            Slot::Container => *self.container.borrow_mut() = state,
            Slot::Glyph(i) => {
                self.glyphs
                    .borrow_mut()
                    .insert(i, (state, delay, Instant::now()));
            }
        }
    }
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnableMouseCapture, Clear(ClearType::All))?;

    let host = Rc::new(TerminalHost::new());
    let engine = RevealEngine::new();

    let handle = animated_text(
        AnimatedTextProps {
            text: "Hello, staggered world!".to_string(),
            // Terminal offsets are cells; reveal after one wheel notch
            threshold: 2.0,
            mobile_threshold: 2.0,
            ..Default::default()
        },
        Rc::clone(&host) as Rc<dyn ScrollHost>,
        Rc::clone(&engine) as Rc<dyn AnimationEngine>,
    );

    let result = run(&mut stdout, &host, &engine, &handle);

    execute!(stdout, DisableMouseCapture, Clear(ClearType::All), MoveTo(0, 0))?;
    disable_raw_mode()?;
    handle.unmount();

    result
}

fn run(
    stdout: &mut io::Stdout,
    host: &Rc<TerminalHost>,
    engine: &Rc<RevealEngine>,
    handle: &AnimatedTextHandle,
) -> io::Result<()> {
    loop {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    return Ok(());
                }
                other => host.pump_event(&other),
            }
        }

        let display = handle.display_text();
        let mut line = String::with_capacity(display.len());
        for (i, glyph) in display.iter() {
            line.push(if engine.is_shown(i) { glyph } else { ' ' });
        }

        queue!(
            stdout,
            MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print(format!(
                "scroll: {:>5.1}   state: {:?}   (wheel to scroll, q to quit)",
                host.scroll_offset(),
                handle.state(),
            )),
            MoveTo(0, 2),
            Clear(ClearType::CurrentLine),
            Print(line),
        )?;
        stdout.flush()?;
    }
}
