use super::App;
use ratatui::{
    prelude::*,
    widgets::{block::*, *},
};
use wordlegame::session::Status;
use wordlegame::wordle::{Attempt, LetterState, MAX_ATTEMPTS, WORD_LENGTH};

const SUBTITLE: &str = "Six letters, six tries";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = self.create_border();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3),
                Constraint::Length(3 * MAX_ATTEMPTS as u16),
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Fill(1),
            ])
            .split(border.inner(area));

        self.render_header(rows[0], buf);
        self.render_grid(rows[1], buf);
        self.render_input(rows[2], buf);
        render_legend(rows[3], buf);

        border.render(area, buf);
    }
}

impl App {
    fn create_border(&self) -> Block<'_> {
        let title = Title::from(" WORDLE ".bold());
        let instructions = Title::from(Line::from(vec![
            " Quit ".into(),
            "<Esc> ".blue().bold(),
            " Submit ".into(),
            "<Enter> ".blue().bold(),
            " New game ".into(),
            "<Ctrl-R> ".blue().bold(),
        ]));
        Block::default()
            .title(title.alignment(Alignment::Center))
            .title(
                instructions
                    .alignment(Alignment::Center)
                    .position(block::Position::Bottom),
            )
            .borders(Borders::ALL)
            .border_set(symbols::border::PLAIN)
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(vec!["Time: ".bold(), self.game.clock().to_string().bold()]),
            Line::from(SUBTITLE.dark_gray()),
        ])
        .centered()
        .block(Block::new().padding(Padding::new(0, 0, 1, 0)))
        .render(area, buf);
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let session = self.game.session();
        let word_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); MAX_ATTEMPTS])
            .split(area);

        for (i, attempt) in session.attempts().iter().enumerate() {
            // The row being filled shows what was typed so far
            let preview = match session.status() {
                Status::Playing if i == session.current_attempt() => Some(session.input()),
                _ => None,
            };
            attempt.render(word_rows[i], buf, preview);
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let session = self.game.session();
        let lines = match session.status() {
            Status::Playing => {
                let typed = session.input().len();
                let blanks = "_".repeat(WORD_LENGTH - typed);
                vec![
                    Line::from(vec![
                        "Your word: ".into(),
                        session.input().bold(),
                        blanks.dark_gray(),
                    ]),
                    Line::from(vec![
                        "Submit ".into(),
                        format!("({typed}/{WORD_LENGTH})").bold().blue(),
                    ]),
                ]
            }
            Status::Won => vec![
                Line::from("Congratulations! 🎉".bold().green()),
                Line::from(vec!["Play again ".into(), "<Ctrl-R>".blue().bold()]),
            ],
            Status::Lost => vec![
                Line::from(vec![
                    "The word was: ".bold().red(),
                    session.target().to_string().bold().red(),
                ]),
                Line::from(vec!["Play again ".into(), "<Ctrl-R>".blue().bold()]),
            ],
        };
        Paragraph::new(lines)
            .centered()
            .block(Block::new().padding(Padding::new(0, 0, 1, 0)))
            .render(area, buf);
    }
}

fn render_legend(area: Rect, buf: &mut Buffer) {
    let entry = |color: Color, text: &'static str| {
        Line::from(vec![
            Span::styled("  ", Style::new().bg(color)),
            Span::raw(" "),
            Span::raw(text),
        ])
    };
    Paragraph::new(vec![
        Line::default(),
        entry(Color::Green, "Right letter in the right spot"),
        entry(Color::Yellow, "Right letter in the wrong spot"),
        entry(Color::Red, "Letter not in the word"),
    ])
    .style(Style::new().dark_gray())
    .block(Block::new().padding(Padding::horizontal(2)))
    .render(area, buf);
}

fn letter_style(state: LetterState) -> Style {
    match state {
        LetterState::Empty => Style::default(),
        LetterState::Absent => Style::default().bg(Color::Red).fg(Color::White),
        LetterState::Present => Style::default().bg(Color::Yellow).fg(Color::Black),
        LetterState::Correct => Style::default()
            .bg(Color::Green)
            .fg(Color::White)
            .bold(),
    }
}

trait RenderAttempt {
    fn render(&self, area: Rect, buf: &mut Buffer, preview: Option<&str>);
}

impl RenderAttempt for Attempt {
    fn render(&self, area: Rect, buf: &mut Buffer, preview: Option<&str>) {
        let row_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(5); WORD_LENGTH])
            .flex(layout::Flex::Center)
            .split(area);

        let mut typed = preview.map(str::chars);
        for (i, letter) in self.letters.iter().enumerate() {
            let (char, block) = match (letter.state, typed.as_mut()) {
                (LetterState::Empty, Some(chars)) => (
                    chars.next(),
                    Block::new()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::new().white()),
                ),
                (LetterState::Empty, None) => (
                    None,
                    Block::new()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::new().dark_gray()),
                ),
                (state, _) => (
                    letter.char,
                    Block::new()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(letter_style(state)),
                ),
            };

            let text = char.map(String::from).unwrap_or_default();
            Paragraph::new(text)
                .bold()
                .centered()
                .block(block)
                .style(letter_style(letter.state))
                .render(row_layout[i], buf);
        }
    }
}
