mod clipboard;
mod courier;
mod device;
mod logging;
mod views;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_config::{Config, ConfigError};
use folio_core::content::{CategoryFilter, GITHUB_URL};
use folio_core::{
    ContactForm, Delivery, DeliveryError, DeviceTier, FormError, MotionGate, Notices, Section,
    SectionSpan, SeenSections, active_section, estimate, nav::section_top,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
};

use clipboard::{ClipboardBackend, SystemClipboard};
use courier::Courier;
use views::{Document, Palette, footer, header, home, max_scroll, notices, projects, skills};
use views::hero::HeroView;

/// Frame period of the event loop.
const FRAME: Duration = Duration::from_millis(33);
/// The header shows its divider once scrolled past this many rows.
const SCROLLED_PAST: u16 = 1;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::load();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str()).to_string();
    match logging::init(&log_level) {
        Ok(path) => tracing::info!(path = %path.display(), "logging started"),
        Err(e) => eprintln!("folio: logging disabled: {e}"),
    }
    let (config, config_path) = settings(config, folio_config::config_path().ok());

    let signals = device::with_overrides(device::probe(), &config.device);
    let tier = estimate(&signals);
    let gate = MotionGate::from_env(config.reduced_motion);
    tracing::info!(
        tier = tier.label(),
        memory_gb = ?signals.memory_gb,
        cores = ?signals.logical_cores,
        reduced_motion = gate.reduced_motion(),
        "starting"
    );

    let delivery = courier::delivery_from_config(&config.contact);
    let app = App::new(
        config,
        config_path,
        gate,
        tier,
        Box::new(SystemClipboard::new()),
        delivery,
    );

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The config to run with and where theme changes may be saved. A file
/// that failed to load is never written, so its contents survive for the
/// user to fix.
fn settings(
    loaded: Result<Config, ConfigError>,
    path: Option<PathBuf>,
) -> (Config, Option<PathBuf>) {
    match loaded {
        Ok(config) => (config, path),
        Err(e) => {
            tracing::warn!(error = %e, "using default config; changes will not be saved");
            (Config::default(), None)
        }
    }
}

/// Which page fills the body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Page {
    #[default]
    Home,
    Projects,
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Where theme changes are saved. `None` keeps them in memory.
    config_path: Option<PathBuf>,
    gate: MotionGate,
    tier: DeviceTier,
    page: Page,
    /// Mounted while the home page is shown.
    hero: Option<HeroView>,
    scroll: u16,
    /// Largest scroll offset seen at the last draw.
    scroll_limit: u16,
    /// Body rows at the last draw.
    viewport: u16,
    spans: Vec<SectionSpan>,
    /// Section to scroll to once the home layout is known.
    pending_jump: Option<Section>,
    seen: SeenSections,
    form: ContactForm,
    /// Keystrokes go to the contact form.
    form_active: bool,
    courier: Courier,
    clipboard: Box<dyn ClipboardBackend>,
    notices: Notices,
    filter: CategoryFilter,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        gate: MotionGate,
        tier: DeviceTier,
        clipboard: Box<dyn ClipboardBackend>,
        delivery: Arc<dyn Delivery>,
    ) -> Self {
        Self {
            running: false,
            config,
            config_path,
            gate,
            tier,
            page: Page::Home,
            hero: None,
            scroll: 0,
            scroll_limit: 0,
            viewport: 0,
            spans: Vec::new(),
            pending_jump: None,
            seen: SeenSections::new(),
            form: ContactForm::new(),
            form_active: false,
            courier: Courier::new(delivery),
            clipboard,
            notices: Notices::new(),
            filter: CategoryFilter::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now = Instant::now();
            self.tick(now);
            terminal.draw(|frame| self.render(frame, now))?;
            self.handle_crossterm_events()?;
        }
        tracing::info!("quit");
        Ok(())
    }

    /// Advance timers and collect finished background work.
    fn tick(&mut self, now: Instant) {
        if let Some(hero) = self.hero.as_mut() {
            hero.update(now);
        }
        self.notices.prune(now);
        if let Some(result) = self.courier.poll() {
            self.finish_delivery(result, now);
        }
    }

    fn finish_delivery(&mut self, result: Result<(), DeliveryError>, now: Instant) {
        match self.form.finish(result) {
            Some(Ok(())) => {
                tracing::info!("contact message delivered");
                self.notices
                    .success("Message sent successfully! I'll get back to you soon.", now);
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "contact message failed");
                self.notices.failure("Failed to send message. Please try again.", now);
            }
            None => {}
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        let [header_area, body, help_area] = Layout::vertical([
            Constraint::Length(header::HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let palette = Palette::new(self.config.color_theme);
        self.viewport = body.height;

        let doc = match self.page {
            Page::Home => self.home_document(body, &palette, now),
            Page::Projects => self.projects_document(body.width, &palette),
        };
        self.scroll_limit = max_scroll(doc.height(), body.height);
        self.scroll = self.scroll.min(self.scroll_limit);
        doc.blit(self.scroll, body, frame.buffer_mut());

        let state = header::HeaderState {
            active: active_section(self.scroll, &self.spans),
            scrolled: self.scroll > SCROLLED_PAST,
            projects_page: self.page == Page::Projects,
        };
        header::render(header_area, frame.buffer_mut(), &palette, state);
        notices::render(body, frame.buffer_mut(), &palette, &self.notices, now);
        self.render_help(frame, help_area, &palette);
    }

    fn home_document(&mut self, body: Rect, palette: &Palette, now: Instant) -> Document {
        let layout = home::layout(body.width, body.height);
        self.spans.clone_from(&layout.spans);
        if let Some(top) = self
            .pending_jump
            .take()
            .and_then(|section| section_top(section, &self.spans))
        {
            self.scroll = top;
        }
        let scroll = self.scroll.min(max_scroll(layout.height, body.height));
        self.seen.observe(scroll, body.height, &self.spans, now);

        let skills_progress = if self.gate.reduced_motion() {
            1.0
        } else {
            self.seen.progress(Section::Skills, now, skills::FILL_DURATION)
        };
        // Detached so the frame can borrow the form alongside it
        let mut hero = match self.hero.take() {
            Some(hero) => hero,
            None => HeroView::mount(
                self.gate,
                self.tier,
                Duration::from_millis(self.config.typing_delay_ms),
                self.config.particle_count,
                now,
            ),
        };
        let frame = home::HomeFrame {
            palette: *palette,
            form: &self.form,
            form_active: self.form_active,
            skills_progress,
            now,
        };
        let doc = home::render(body.width, &layout, &mut hero, &frame);
        self.hero = Some(hero);
        doc
    }

    fn projects_document(&mut self, width: u16, palette: &Palette) -> Document {
        self.spans.clear();
        let page_height = projects::page_height(width, self.filter);
        let mut doc = Document::new(width, page_height + footer::HEIGHT);
        let area = doc.rows(0, page_height);
        projects::render_page(area, doc.buffer_mut(), palette, self.filter);
        let area = doc.rows(page_height, footer::HEIGHT);
        footer::render(area, doc.buffer_mut(), palette);
        doc
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let color = palette.accent;
        let help = if self.form_active {
            Line::from(vec![
                "tab".bold().fg(color),
                " next field  ".dark_gray(),
                "enter".bold().fg(color),
                " send  ".dark_gray(),
                "esc".bold().fg(color),
                " leave form".dark_gray(),
            ])
        } else {
            let mut spans = vec![
                "q".bold().fg(color),
                " quit  ".dark_gray(),
                "j/k".bold().fg(color),
                " scroll  ".dark_gray(),
            ];
            match self.page {
                Page::Home => spans.extend([
                    "1-4".bold().fg(color),
                    " jump  ".dark_gray(),
                    "p".bold().fg(color),
                    " projects  ".dark_gray(),
                    "tab".bold().fg(color),
                    " contact  ".dark_gray(),
                ]),
                Page::Projects => spans.extend([
                    "f".bold().fg(color),
                    " filter  ".dark_gray(),
                    "p".bold().fg(color),
                    " home  ".dark_gray(),
                ]),
            }
            spans.extend([
                "g".bold().fg(color),
                " copy GitHub  ".dark_gray(),
                "c".bold().fg(color),
                " cycle color".dark_gray(),
            ]);
            Line::from(spans)
        };
        frame.render_widget(help.centered(), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.on_key_event(key, Instant::now())
                }
                Event::Mouse(_) => {}
                // The next draw re-lays out and clamps the scroll
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent, now: Instant) {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            self.quit();
            return;
        }
        if self.form_active {
            self.on_form_key(key, now);
            return;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(self.page_step()),
            KeyCode::PageUp => self.scroll_by(-self.page_step()),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll = self.scroll_limit,
            KeyCode::Char(ch @ '1'..='4') => {
                let index = usize::from(ch as u8 - b'1');
                self.jump_to(Section::NAV[index]);
            }
            KeyCode::Char('p') => self.toggle_page(),
            KeyCode::Char('g') => self.copy_github_url(now),
            KeyCode::Char('c') => self.cycle_color_theme(),
            KeyCode::Char('f') if self.page == Page::Projects => {
                self.filter = self.filter.next();
                self.scroll = 0;
            }
            KeyCode::Tab => self.enter_form(),
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.form_active = false,
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Enter => self.submit(now),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.insert_char(ch)
            }
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.form.begin_submit() {
            Ok(message) => {
                tracing::info!("sending contact message");
                if !self.courier.dispatch(message) {
                    self.finish_delivery(Err(DeliveryError::Interrupted), now);
                }
            }
            Err(FormError::InFlight) => {}
            Err(e @ FormError::Missing(_)) => self.notices.failure(e.to_string(), now),
        }
    }

    fn page_step(&self) -> i32 {
        i32::from(self.viewport.saturating_sub(1).max(1))
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.scroll_limit));
        self.scroll = next as u16;
    }

    fn jump_to(&mut self, section: Section) {
        if self.page != Page::Home {
            self.toggle_page();
        }
        self.scroll_to(section);
    }

    /// Scroll a home page section to the top, now or after the next layout.
    fn scroll_to(&mut self, section: Section) {
        match section_top(section, &self.spans) {
            Some(top) => self.scroll = top.min(self.scroll_limit),
            None => self.pending_jump = Some(section),
        }
    }

    /// Switch between the home and projects pages. Leaving home unmounts
    /// the hero.
    fn toggle_page(&mut self) {
        self.page = match self.page {
            Page::Home => {
                self.hero = None;
                self.form_active = false;
                Page::Projects
            }
            Page::Projects => Page::Home,
        };
        self.scroll = 0;
        self.spans.clear();
        self.pending_jump = None;
        tracing::debug!(page = ?self.page, "page changed");
    }

    fn enter_form(&mut self) {
        if self.page != Page::Home {
            return;
        }
        self.form_active = true;
        self.scroll_to(Section::Contact);
    }

    fn copy_github_url(&mut self, now: Instant) {
        let outcome = clipboard::copy(
            self.clipboard.as_mut(),
            GITHUB_URL,
            "GitHub URL copied!",
            &mut self.notices,
            now,
        );
        if outcome == clipboard::CopyOutcome::Copied {
            if let Some(hero) = self.hero.as_mut() {
                hero.mark_copied(now);
            }
        }
    }

    /// Cycle through available color themes and remember the choice.
    fn cycle_color_theme(&mut self) {
        self.config.color_theme = self.config.color_theme.next();
        let Some(path) = self.config_path.as_deref() else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!(error = %e, "could not save color theme");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
