use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::{find_by_title, Movie};

use super::helpers::{build_poster_lines, repeat_pattern_row};
use super::posters::poster_art;
use super::screens::{CatalogScreen, CategoryRow, DetailScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Vertical space allocated to each category shelf, including its label row.
const SHELF_HEIGHT: u16 = 11;
/// Width of one poster card, borders included. Wide enough for most captions
/// while keeping four or five cards visible on a typical terminal.
const CARD_WIDTH: u16 = 24;
/// Height of the poster artwork block on the detail page.
const DETAIL_POSTER_HEIGHT: u16 = 6;

/// High-level navigation states. The catalog screen state lives on `App`
/// directly so the shelf cursor survives a round trip through a detail page.
enum Screen {
    Catalog,
    Detail(DetailScreen),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. The movie list is loaded
/// once at startup and never written again for the rest of the session.
pub struct App {
    movies: Vec<Movie>,
    catalog: CatalogScreen,
    screen: Screen,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(movies: Vec<Movie>) -> Self {
        let catalog = CatalogScreen::new(&movies);
        let status = Some(StatusMessage {
            text: format!(
                "{} titles in {} categories.",
                movies.len(),
                catalog.groups.len()
            ),
            kind: StatusKind::Info,
        });
        Self {
            movies,
            catalog,
            screen: Screen::Catalog,
            status,
        }
    }

    /// Dispatch a key press for the active screen. Returns `true` when the
    /// application should exit.
    pub(crate) fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        match &self.screen {
            Screen::Catalog => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    exit = true;
                }
                KeyCode::Left => self.catalog.move_horizontal(-1),
                KeyCode::Right => self.catalog.move_horizontal(1),
                KeyCode::Up => self.catalog.move_vertical(-1),
                KeyCode::Down => self.catalog.move_vertical(1),
                KeyCode::Enter => {
                    // Navigation is by title string, the same opaque route
                    // parameter the detail screen resolves on draw.
                    if let Some(movie) = self.catalog.current_movie() {
                        let title = movie.title.clone();
                        self.clear_status();
                        self.screen = Screen::Detail(DetailScreen::for_title(title));
                    } else {
                        self.set_status("No movie selected.", StatusKind::Error);
                    }
                }
                _ => {}
            },
            Screen::Detail(_) => match code {
                KeyCode::Char('q') => {
                    exit = true;
                }
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    self.clear_status();
                    self.screen = Screen::Catalog;
                }
                _ => {}
            },
        }
        Ok(exit)
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Catalog => self.draw_catalog(frame, content_area),
            Screen::Detail(detail) => self.draw_detail(frame, content_area, detail),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_catalog(&self, frame: &mut Frame, area: Rect) {
        if self.catalog.is_empty() {
            let message = Paragraph::new("The catalog is empty.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        // Window the shelves so the selected one is always on screen even on
        // short terminals.
        let visible = ((area.height / SHELF_HEIGHT).max(1)) as usize;
        let first = if self.catalog.selected_group < visible {
            0
        } else {
            self.catalog.selected_group + 1 - visible
        };
        let shown = self.catalog.groups.len().min(first + visible) - first;

        let constraints: Vec<Constraint> = (0..shown)
            .map(|_| Constraint::Length(SHELF_HEIGHT))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (slot, group_idx) in (first..first + shown).enumerate() {
            let group = &self.catalog.groups[group_idx];
            let selected_column = if group_idx == self.catalog.selected_group {
                Some(self.catalog.selected_movie)
            } else {
                None
            };
            self.draw_shelf(frame, chunks[slot], group, selected_column);
        }
    }

    fn draw_shelf(
        &self,
        frame: &mut Frame,
        area: Rect,
        group: &CategoryRow,
        selected_column: Option<usize>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let label = Paragraph::new(Line::from(vec![
            Span::styled(
                group.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ({} titles)", group.movies.len())),
        ]));
        frame.render_widget(label, chunks[0]);

        // Window the columns the same way the catalog windows its shelves.
        let card_area = chunks[1];
        let visible = ((card_area.width / CARD_WIDTH).max(1)) as usize;
        let anchor = selected_column.unwrap_or(0);
        let first = if anchor < visible { 0 } else { anchor + 1 - visible };
        let shown = group.movies.len().min(first + visible) - first;

        let constraints: Vec<Constraint> = (0..shown)
            .map(|_| Constraint::Length(CARD_WIDTH))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(card_area);

        for (slot, movie_idx) in (first..first + shown).enumerate() {
            let movie = &group.movies[movie_idx];
            let selected = selected_column == Some(movie_idx);
            let mut block = Block::default().borders(Borders::ALL);
            if selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }
            let column_chunk = columns[slot];
            let inner_width = column_chunk.width.saturating_sub(2);
            let inner_height = column_chunk.height.saturating_sub(2);
            let lines = build_poster_lines(
                &movie.headline(),
                poster_art(&movie.image),
                inner_width,
                inner_height,
                selected,
            );
            let card = Paragraph::new(lines)
                .alignment(Alignment::Left)
                .block(block);
            frame.render_widget(card, column_chunk);
        }
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, detail: &DetailScreen) {
        let Some(movie) = find_by_title(&detail.title, &self.movies) else {
            // Unknown titles degrade to a friendly page instead of an error.
            let message = Paragraph::new("Movie not Found")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        };

        let poster_height = DETAIL_POSTER_HEIGHT.min(area.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(poster_height),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            "Movie Details",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, chunks[0]);

        self.draw_detail_poster(frame, chunks[1], movie);

        let field_rows = vec![
            detail_row("Title", movie.title.clone()),
            detail_row("Category", movie.category.clone()),
            detail_row("Synopsis", movie.synopsis.clone()),
            detail_row("Original Title", movie.original_title.clone()),
            detail_row("Genre", movie.genre.clone()),
            detail_row("Episodes", movie.episodes.to_string()),
            detail_row("Year", movie.year.to_string()),
            detail_row("Country", movie.country.clone()),
            detail_row("Director", movie.director.clone()),
            detail_row("Cast", movie.cast.clone()),
            detail_row("Available Until", movie.available_until.clone()),
        ];
        let fields = Paragraph::new(field_rows).wrap(Wrap { trim: true });
        frame.render_widget(fields, chunks[2]);
    }

    fn draw_detail_poster(&self, frame: &mut Frame, area: Rect, movie: &Movie) {
        let block = Block::default().borders(Borders::ALL).title(movie.headline());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let pattern = poster_art(&movie.image);
        let style = Style::default().fg(Color::DarkGray);
        let lines: Vec<Line> = (0..inner.height as usize)
            .map(|row_idx| {
                let base = if pattern.is_empty() {
                    ""
                } else {
                    pattern[row_idx % pattern.len()]
                };
                Line::from(Span::styled(
                    repeat_pattern_row(base, inner.width as usize),
                    style,
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.screen {
            Screen::Catalog => Line::from(vec![
                Span::styled("[←→↑↓]", key_style),
                Span::raw(" Browse   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Details   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Screen::Detail(_) => Line::from(vec![
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }
}

/// Build one `Label: value` line for the detail page.
fn detail_row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}
