use std::cell::Cell;
use std::fs::File;
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind,
};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{event, execute, queue};
use simplelog::{Config, LevelFilter, WriteLogger};

use scrollrail::{
    ContinuousController, ContinuousSource, FadePhase, Orientation, Rect, Scrollbar,
    ScrollbarSettings, SelectionMode, ViewportMetrics,
};

/// How long after the last wheel tick the source still reports an active
/// scroll, keeping the bar visible.
const SCROLL_SETTLE: Duration = Duration::from_millis(250);

/// A scrollable list of numbered lines, one terminal row per line.
struct TextViewport {
    total_lines: usize,
    height: Cell<f32>,
    offset: Cell<f32>,
    last_scroll: Cell<Option<Instant>>,
}

impl TextViewport {
    fn new(total_lines: usize) -> Self {
        Self {
            total_lines,
            height: Cell::new(0.0),
            offset: Cell::new(0.0),
            last_scroll: Cell::new(None),
        }
    }

    fn max_offset(&self) -> f32 {
        (self.total_lines as f32 - self.height.get()).max(0.0)
    }

    fn scroll_wheel(&self, delta: f32) {
        let target = self.offset.get() + delta;
        self.offset.set(target.clamp(0.0, self.max_offset()));
        self.last_scroll.set(Some(Instant::now()));
    }
}

impl ContinuousSource for &TextViewport {
    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics {
            visible_length: self.height.get(),
            scroll_offset: self.offset.get(),
            max_scroll_offset: self.max_offset(),
            scroll_in_progress: self
                .last_scroll
                .get()
                .is_some_and(|at| at.elapsed() < SCROLL_SETTLE),
        }
    }

    fn scroll_to(&self, offset: f32) {
        self.offset.set(offset.clamp(0.0, self.max_offset()));
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let viewport = TextViewport::new(300);
    // One terminal cell per pixel: a 1-cell thumb flush with the edge that
    // slides one column off-screen while hiding
    let settings = ScrollbarSettings::default()
        .thumb_thickness(1.0)
        .scrollbar_padding(0.0)
        .hide_displacement(1.0)
        .selection_mode(SelectionMode::Full);
    let mut bar = Scrollbar::continuous(&viewport, settings, Orientation::Vertical)
        .expect("default-based settings are valid");

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let result = run(&viewport, &mut bar);
    execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn run(
    viewport: &TextViewport,
    bar: &mut Scrollbar<ContinuousController<&TextViewport>>,
) -> std::io::Result<()> {
    let mut drag_from: Option<f32> = None;

    loop {
        let (cols, rows) = size()?;
        let body_rows = rows.saturating_sub(1);
        viewport.height.set(body_rows as f32);
        let track = Rect::new(0.0, 1.0, cols as f32, body_rows as f32);

        let frame = bar.frame(track, None, Instant::now());
        draw(viewport, cols, rows, frame.as_ref())?;

        let timeout = frame
            .as_ref()
            .and_then(|frame| frame.next_deadline)
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250));
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => viewport.scroll_wheel(-1.0),
                KeyCode::Down => viewport.scroll_wheel(1.0),
                _ => {}
            },
            Event::Mouse(mouse) => {
                let x = mouse.column as f32 + 0.5;
                let y = mouse.row as f32 + 0.5;
                match mouse.kind {
                    MouseEventKind::ScrollUp => viewport.scroll_wheel(-3.0),
                    MouseEventKind::ScrollDown => viewport.scroll_wheel(3.0),
                    MouseEventKind::Down(MouseButton::Left) => {
                        let on_bar = frame
                            .as_ref()
                            .is_some_and(|frame| frame.hit_region.contains(x, y));
                        if on_bar && bar.drag_started(y - track.y, track.height, Instant::now()) {
                            drag_from = Some(y);
                        }
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        if let Some(from) = drag_from {
                            bar.drag_delta(y - from, track.height);
                            drag_from = Some(y);
                        }
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        drag_from = None;
                        bar.drag_stopped();
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn draw(
    viewport: &TextViewport,
    cols: u16,
    rows: u16,
    frame: Option<&scrollrail::ScrollbarFrame>,
) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    queue!(out, Print("scrollrail demo - wheel/drag scrollbar, q quits"))?;

    let first = viewport.offset.get().floor() as usize;
    for row in 0..rows.saturating_sub(1) {
        let line = first + row as usize;
        if line >= viewport.total_lines {
            break;
        }
        queue!(
            out,
            MoveTo(0, row + 1),
            Print(format!("line {:>4}", line + 1))
        )?;
    }

    if let Some(frame) = frame {
        if frame.phase != FadePhase::Hidden {
            queue!(out, SetForegroundColor(dim(frame.color, frame.alpha)))?;
            let x = frame.thumb.x.round() as i32;
            if (0..cols as i32).contains(&x) {
                let top = frame.thumb.y.round() as i32;
                let bottom = (frame.thumb.y + frame.thumb.height).round() as i32;
                for row in top..bottom.max(top + 1) {
                    if row >= 1 && (row as u16) < rows {
                        queue!(out, MoveTo(x as u16, row as u16), Print("█"))?;
                    }
                }
            }
            queue!(out, ResetColor)?;
        }
    }
    out.flush()
}

/// Fold the fade alpha into the color, terminals not compositing for us.
fn dim(color: scrollrail::Color, alpha: f32) -> TermColor {
    let scale = |channel: u8| (channel as f32 * alpha) as u8;
    TermColor::Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
