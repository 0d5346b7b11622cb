//! Interactive terminal loop: reads commands from stdin, redraws the active
//! list view, and turns scrolling into scroll events for its controller.

pub mod input;
pub mod screen;
pub mod viewport;

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::api::bank::BankClient;
use crate::config::Config;
use crate::pager::Notifier;

use input::{Command, HELP};
use screen::{Frame, Screen};
use viewport::Viewport;

pub struct App {
    client: Arc<BankClient>,
    notifier: Arc<dyn Notifier>,
    config: Config,
    /// Mounted views, innermost last; `back` pops
    screens: Vec<(Screen, Viewport)>,
    /// Failed-request alerts posted by the notifier
    alerts: UnboundedReceiver<String>,
    /// Latest alert; stays on screen until the next command
    alert: Option<String>,
    message: Option<String>,
}

impl App {
    pub fn new(
        client: Arc<BankClient>,
        notifier: Arc<dyn Notifier>,
        alerts: UnboundedReceiver<String>,
        config: Config,
    ) -> Self {
        App {
            client,
            notifier,
            config,
            screens: Vec::new(),
            alerts,
            alert: None,
            message: None,
        }
    }

    pub async fn run(mut self, first: Screen) -> io::Result<()> {
        let (redraw_tx, mut redraw_rx) = mpsc::unbounded_channel();
        self.push(first, &redraw_tx);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        self.draw().await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    self.alert = None;
                    match input::parse(&line) {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.handle_command(command, &redraw_tx).await,
                        Err(e) => self.message = Some(e),
                    }
                    self.draw().await?;
                }
                Some(()) = redraw_rx.recv() => self.draw().await?,
            }
        }

        for (screen, _) in &self.screens {
            screen.unmount().await;
        }
        info!("Bye");
        Ok(())
    }

    fn push(&mut self, screen: Screen, redraw: &UnboundedSender<()>) {
        screen.mount(redraw);
        self.screens.push((screen, Viewport::new(self.config.viewport_rows)));
    }

    async fn handle_command(&mut self, command: Command, redraw: &UnboundedSender<()>) {
        match command {
            Command::Help => self.message = Some(HELP.to_string()),
            Command::Back => {
                if self.screens.len() > 1 {
                    if let Some((screen, _)) = self.screens.pop() {
                        screen.unmount().await;
                    }
                } else {
                    self.message = Some("Already at the first view".to_string());
                }
            }
            Command::Open(key) => self.open_account(&key, redraw).await,
            Command::Down(rows) => {
                self.scroll(|vp, height| {
                    let delta = step(rows, vp);
                    vp.scroll_by(delta, height)
                }, redraw)
                .await
            }
            Command::Up(rows) => {
                self.scroll(|vp, height| {
                    let delta = step(rows, vp);
                    vp.scroll_by(-delta, height)
                }, redraw)
                .await
            }
            Command::Top => self.scroll(|vp, _| vp.to_top(), redraw).await,
            Command::Bottom => self.scroll(|vp, height| vp.to_bottom(height), redraw).await,
            Command::Quit => {}
        }
    }

    async fn open_account(&mut self, key: &str, redraw: &UnboundedSender<()>) {
        let Some((current, _)) = self.screens.last() else {
            return;
        };

        match current.find_account(key).await {
            Some(account) => {
                info!("Opening {}", account.detail_path());
                let screen = Screen::transactions(
                    Arc::clone(&self.client),
                    account.id,
                    account.number.clone(),
                    Arc::clone(&self.notifier),
                    self.config.policy,
                );
                self.push(screen, redraw);
            }
            None => self.message = Some(format!("No loaded account matches `{}`", key)),
        }
    }

    /// Move the viewport, then fire one scroll event at the new position
    async fn scroll<F>(&mut self, movement: F, redraw: &UnboundedSender<()>)
    where
        F: FnOnce(&mut Viewport, u32),
    {
        let links = self.link_base();
        let Some((screen, viewport)) = self.screens.last_mut() else {
            return;
        };

        let height = document_height(&screen.frame(links.as_deref()).await);
        movement(viewport, height);

        let position = viewport.position(height);
        debug!("Scroll event at {:?}", position);
        screen.scrolled(position, redraw);
    }

    /// Origin that relative row links are resolved against, when links are on
    fn link_base(&self) -> Option<String> {
        self.config.hyperlinks.then(|| self.client.base_url().to_string())
    }

    async fn draw(&mut self) -> io::Result<()> {
        while let Ok(alert) = self.alerts.try_recv() {
            self.alert = Some(alert);
        }

        let links = self.link_base();
        let Some((screen, viewport)) = self.screens.last_mut() else {
            return Ok(());
        };
        let frame = screen.frame(links.as_deref()).await;

        // Rows may have been added or the list replaced since the last draw
        let height = document_height(&frame);
        viewport.scroll_by(0, height);

        let output = compose(&frame, viewport, self.alert.as_deref(), self.message.take().as_deref());

        let mut stdout = io::stdout().lock();
        if stdout.is_terminal() {
            write!(stdout, "\x1b[2J\x1b[H")?;
        }
        write!(stdout, "{}", output)?;
        stdout.flush()
    }
}

fn step(rows: Option<u32>, viewport: &Viewport) -> i64 {
    i64::from(rows.unwrap_or(viewport.rows))
}

fn document_height(frame: &Frame) -> u32 {
    u32::try_from(frame.text.lines().count()).unwrap_or(u32::MAX)
}

/// Visible window, status line, alert and message if any, prompt
fn compose(frame: &Frame, viewport: &Viewport, alert: Option<&str>, message: Option<&str>) -> String {
    let lines: Vec<&str> = frame.text.lines().collect();
    let mut output = String::new();
    for line in viewport.window(&lines) {
        output.push_str(line);
        output.push('\n');
    }

    let first = if lines.is_empty() { 0 } else { viewport.scroll_y + 1 };
    let last = (viewport.scroll_y + viewport.rows).min(lines.len() as u32);
    output.push_str(&format!(
        "-- lines {}-{} of {} | {} loaded | next offset {}{} --\n",
        first,
        last,
        lines.len(),
        frame.loaded,
        frame.cursor,
        if frame.exhausted { " | end of data" } else { "" }
    ));

    if let Some(alert) = alert {
        output.push_str(alert);
        output.push('\n');
    }
    if let Some(message) = message {
        output.push_str(message);
        output.push('\n');
    }
    output.push_str("> ");
    output
}
