use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::event::Event;
use crate::navigation::Navigator;
use crate::pagination::PageTarget;
use crate::selection::SelectionPhase;

/// Which panel receives cursor keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    People,
    Films,
}

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct App {
    pub navigator: Navigator,
    pub focus: Focus,
    pub person_index: usize,
    pub film_index: usize,
    pub should_quit: bool,
    /// Digits typed so far while the go-to-page prompt is open
    pub page_input: Option<String>,
    spinner_frame: usize,
}

impl App {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            focus: Focus::default(),
            person_index: 0,
            film_index: 0,
            should_quit: false,
            page_input: None,
            spinner_frame: 0,
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::Load,
            Event::Tick => Action::Tick,
            Event::Key(key) => self.handle_key(key),
            Event::Render => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        if self.page_input.is_some() {
            return match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() => Action::PageInput(c),
                KeyCode::Backspace => Action::PageInputBackspace,
                KeyCode::Enter => Action::PageInputConfirm,
                KeyCode::Esc => Action::ExitPageInput,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Esc | KeyCode::Backspace => Action::Back,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Enter => Action::Select,
            KeyCode::Tab => Action::SwitchFocus,
            KeyCode::Char('n') | KeyCode::Right => Action::NextPage,
            KeyCode::Char('p') | KeyCode::Left => Action::PrevPage,
            KeyCode::Char(':') | KeyCode::Char('g') => Action::EnterPageInput,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(Action::GoToPage)
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Back => {
                let phase = self.navigator.state().phase;
                match phase {
                    SelectionPhase::FilmShown => self.navigator.close_film(),
                    SelectionPhase::DetailShown | SelectionPhase::DetailPending => {
                        self.navigator.close_character();
                        self.focus = Focus::People;
                        self.film_index = 0;
                    }
                    SelectionPhase::NoSelection => {
                        self.should_quit = true;
                    }
                }
            }
            Action::ScrollUp => match self.focus {
                Focus::People => self.person_index = self.person_index.saturating_sub(1),
                Focus::Films => self.film_index = self.film_index.saturating_sub(1),
            },
            Action::ScrollDown => match self.focus {
                Focus::People => {
                    if self.person_index + 1 < self.people_len() {
                        self.person_index += 1;
                    }
                }
                Focus::Films => {
                    if self.film_index + 1 < self.films_len() {
                        self.film_index += 1;
                    }
                }
            },
            Action::Select => self.select(),
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::People if self.navigator.state().selected_character.is_some() => {
                        Focus::Films
                    }
                    _ => Focus::People,
                };
            }
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }

            Action::Load => self.navigator.mount(),
            Action::NextPage => self.navigator.request_page(PageTarget::Next),
            Action::PrevPage => self.navigator.request_page(PageTarget::Previous),
            Action::GoToPage(page) => self.navigator.request_page(PageTarget::Number(page)),

            Action::EnterPageInput => {
                self.page_input = Some(String::new());
            }
            Action::PageInput(c) => {
                if let Some(input) = &mut self.page_input {
                    input.push(c);
                }
            }
            Action::PageInputBackspace => {
                if let Some(input) = &mut self.page_input {
                    input.pop();
                }
            }
            Action::PageInputConfirm => {
                let page = self.page_input.take().and_then(|input| input.parse::<u32>().ok());
                if let Some(page) = page {
                    self.navigator.request_page(PageTarget::Number(page));
                }
            }
            Action::ExitPageInput => {
                self.page_input = None;
            }

            Action::Settled(settled) => {
                self.navigator.settle(settled);
                self.clamp_cursors();
            }
            Action::None => {}
        }
    }

    fn select(&mut self) {
        match self.focus {
            Focus::People => {
                let person = self
                    .navigator
                    .state()
                    .page_listing
                    .loaded()
                    .and_then(|listing| listing.items.get(self.person_index))
                    .cloned();
                if let Some(person) = person {
                    self.navigator.select_character(person);
                    self.film_index = 0;
                    self.focus = Focus::Films;
                }
            }
            Focus::Films => {
                let film = {
                    let state = self.navigator.state();
                    if state.phase != SelectionPhase::DetailShown {
                        return;
                    }
                    state
                        .selected_character_detail
                        .loaded()
                        .and_then(|detail| detail.film_refs.get(self.film_index))
                        .cloned()
                };
                if let Some(film) = film {
                    self.navigator.select_film(film);
                }
            }
        }
    }

    fn people_len(&self) -> usize {
        self.navigator
            .state()
            .page_listing
            .loaded()
            .map(|listing| listing.items.len())
            .unwrap_or(0)
    }

    fn films_len(&self) -> usize {
        self.navigator
            .state()
            .selected_character_detail
            .loaded()
            .map(|detail| detail.film_refs.len())
            .unwrap_or(0)
    }

    fn clamp_cursors(&mut self) {
        let people = self.people_len();
        if people > 0 && self.person_index >= people {
            self.person_index = people - 1;
        }
        let films = self.films_len();
        if films > 0 && self.film_index >= films {
            self.film_index = films - 1;
        }
    }
}
