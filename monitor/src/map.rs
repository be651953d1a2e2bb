use std::io;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread;

use signal_hook::consts::SIGWINCH;
use signal_hook::iterator::Signals;
use termion::event::{Event as InputEvent, Key, MouseEvent};
use termion::input::{MouseTerminal, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};
use tui::backend::TermionBackend;
use tui::layout::{Constraint, Direction, Layout};
use tui::style::{Color, Style};
use tui::text::{Span, Spans};
use tui::widgets::canvas::{Canvas, Map, MapResolution};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;
use unicode_width::UnicodeWidthStr;

use crate::dispatch::REFERENCE_CITY;
use crate::error::Error;
use crate::event::Event;
use crate::station::{PassPrediction, StationPosition};

const COL_MAP: Color = Color::DarkGray;
const COL_STATION: Color = Color::LightRed;
const COL_CITY: Color = Color::LightCyan;

const STATION_MARKER: &str = "■─ISS";
const CITY_MARKER: &str = "●";

/// The pass label sits this far above the city marker.
const PASS_LABEL_OFFSET_DEG: f64 = 10.0;

type Backend = TermionBackend<MouseTerminal<RawTerminal<io::Stdout>>>;

/// The two map actions, kept behind a trait so everything but the map view
/// itself builds and tests without a terminal.
pub trait Plot {
    fn world_map(&mut self, position: &StationPosition) -> Result<(), Error>;
    fn world_map_with_pass(
        &mut self,
        position: &StationPosition,
        pass: &PassPrediction,
    ) -> Result<(), Error>;
}

pub struct TerminalMap;

impl Plot for TerminalMap {
    fn world_map(&mut self, position: &StationPosition) -> Result<(), Error> {
        MapView::new(position.clone(), None)?.run()
    }

    fn world_map_with_pass(
        &mut self,
        position: &StationPosition,
        pass: &PassPrediction,
    ) -> Result<(), Error> {
        MapView::new(position.clone(), Some(pass.clone()))?.run()
    }
}

/// Full-screen world map with the station marker, drawn once and kept up
/// until the user dismisses it with a mouse click, `q`, Escape or Ctrl-C.
struct MapView {
    events: Receiver<Event>,
    pass: Option<PassPrediction>,
    position: StationPosition,
    terminal: Terminal<Backend>,
}

impl MapView {
    fn new(position: StationPosition, pass: Option<PassPrediction>) -> Result<Self, Error> {
        let (sender, receiver) = sync_channel(100);

        let mut signals = Signals::new([SIGWINCH])?;
        let winch_send = sender.clone();
        thread::spawn(move || {
            for _ in signals.forever() {
                if winch_send.send(Event::Resize).is_err() {
                    break;
                }
            }
        });

        thread::spawn(move || {
            for event in io::stdin().events().flatten() {
                if sender.send(Event::Input(event)).is_err() {
                    break;
                }
            }
        });

        let stdout = io::stdout().into_raw_mode()?;
        let stdout = MouseTerminal::from(stdout);
        let backend = TermionBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;

        Ok(MapView {
            events: receiver,
            pass,
            position,
            terminal,
        })
    }

    fn run(mut self) -> Result<(), Error> {
        self.draw()?;

        while let Ok(event) = self.events.recv() {
            match event {
                Event::Input(event) => {
                    if dismissed(&event) {
                        break;
                    }
                }
                Event::Resize => self.draw()?,
            }
        }

        self.terminal.show_cursor()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), Error> {
        let size = self.terminal.size()?;
        // degrees of longitude covered by one canvas column; the canvas
        // loses two columns to the block border
        let cell_deg = 360.0 / f64::from(size.width.saturating_sub(2).max(1));

        let station = (self.position.lon_deg, self.position.lat_deg);
        let status = format!(
            " {} / {} ── {} ── q or click to close",
            self.position.latitude, self.position.longitude, self.position.time
        );

        let overlay = self.pass.as_ref().map(|pass| {
            let (city_lat, city_lon) = REFERENCE_CITY;
            let label = format!("Next pass: {}", pass.rise_time);
            // shift the label start so it ends up centered over the marker
            let label_lon =
                (city_lon - cell_deg * f64::from(label.width() as u32) / 2.0).max(-180.0);
            (city_lon, city_lat, label_lon, label)
        });

        self.terminal.draw(|f| {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                .split(f.size());

            let map = Canvas::default()
                .block(Block::default().borders(Borders::ALL).title(" ISS "))
                .paint(|ctx| {
                    ctx.draw(&Map {
                        color: COL_MAP,
                        resolution: MapResolution::High,
                    });
                    ctx.print(
                        station.0,
                        station.1,
                        Spans::from(Span::styled(
                            STATION_MARKER,
                            Style::default().fg(COL_STATION),
                        )),
                    );

                    if let Some((city_lon, city_lat, label_lon, label)) = &overlay {
                        ctx.print(
                            *city_lon,
                            *city_lat,
                            Spans::from(Span::styled(CITY_MARKER, Style::default().fg(COL_CITY))),
                        );
                        ctx.print(
                            *label_lon,
                            *city_lat + PASS_LABEL_OFFSET_DEG,
                            Spans::from(Span::styled(
                                label.clone(),
                                Style::default().fg(COL_CITY),
                            )),
                        );
                    }
                })
                .x_bounds([-180.0, 180.0])
                .y_bounds([-90.0, 90.0]);
            f.render_widget(map, rows[0]);

            let footer = Paragraph::new(Spans::from(Span::raw(status.as_str())));
            f.render_widget(footer, rows[1]);
        })?;

        Ok(())
    }
}

fn dismissed(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Key(Key::Char('q'))
            | InputEvent::Key(Key::Esc)
            | InputEvent::Key(Key::Ctrl('c'))
            | InputEvent::Mouse(MouseEvent::Press(..))
    )
}
