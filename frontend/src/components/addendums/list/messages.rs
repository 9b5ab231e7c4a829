use common::error::ConsoleError;
use common::model::addendum::Addendum;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Addendum>, ConsoleError>),
    SearchChanged(String),
    TypeFilterChanged(String),
    StatusFilterChanged(String),
    GoToPage(usize),
}
