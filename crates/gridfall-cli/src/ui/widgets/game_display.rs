use gridfall_engine::{GameSession, PieceShape};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{ArenaDisplay, PieceDisplay, StatsDisplay, color, style};

/// Full game view: score panel, playfield, and next-piece preview.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    session: &'a GameSession,
    show_ghost: bool,
    paused: bool,
}

impl<'a> GameDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            show_ghost: true,
            paused: false,
        }
    }

    pub fn show_ghost(self, show_ghost: bool) -> Self {
        Self { show_ghost, ..self }
    }

    pub fn paused(self, paused: bool) -> Self {
        Self { paused, ..self }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(1, 0);
        let border_style = if self.paused {
            color::YELLOW
        } else {
            color::WHITE
        };

        let playfield = {
            let widget = ArenaDisplay::new(self.session.arena())
                .falling_piece(self.session.falling_piece())
                .block(Block::bordered().border_style(border_style).style(style));
            if self.show_ghost {
                widget.ghost(self.session.drop_preview())
            } else {
                widget
            }
        };
        let next_panel = PieceDisplay::new()
            .shape(PieceShape::of(self.session.next_kind()))
            .block(
                Block::bordered()
                    .title(Line::from("NEXT").centered())
                    .padding(block_padding)
                    .border_style(border_style)
                    .style(style),
            );
        let stats_panel = StatsDisplay::new(self.session.stats()).block(
            Block::bordered()
                .title(Line::from("SCORE").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats_panel.width()),
            Constraint::Length(playfield.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats_panel.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(playfield.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let board_width = playfield.width();
        stats_panel.render(stats_area, buf);
        playfield.render(board_area, buf);
        next_panel.render(next_area, buf);

        if self.paused {
            let block = Block::new().style(style::PAUSED_BANNER);
            let text = Text::styled("PAUSED", style::PAUSED_BANNER).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
