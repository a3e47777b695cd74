use crate::error::Result;
use crate::gate::FetchToken;
use crate::pagination::PageTarget;
use crate::types::{CharacterDetail, FilmDetail, PageListing, ResourceRef};

/// A finished fetch, tagged with the token it was issued under
#[derive(Debug)]
pub enum Settled {
    Page {
        target: PageTarget,
        token: FetchToken,
        result: Result<PageListing>,
    },
    Character {
        token: FetchToken,
        result: Result<Box<CharacterDetail>>,
    },
    Film {
        film: ResourceRef,
        token: FetchToken,
        result: Result<FilmDetail>,
    },
}

#[derive(Debug)]
pub enum Action {
    Quit,
    Back,
    ScrollUp,
    ScrollDown,
    Select,
    SwitchFocus,
    Tick,

    // Paginator
    Load,
    NextPage,
    PrevPage,
    GoToPage(u32),

    // Go-to-page prompt
    EnterPageInput,
    PageInput(char),
    PageInputBackspace,
    PageInputConfirm,
    ExitPageInput,

    // Fetch results
    Settled(Settled),

    None,
}

impl From<Settled> for Action {
    fn from(settled: Settled) -> Self {
        Action::Settled(settled)
    }
}
