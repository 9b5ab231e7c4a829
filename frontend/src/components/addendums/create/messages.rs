use common::error::ConsoleError;
use common::model::addendum::AddendumType;
use common::model::vehicle::VehicleCategory;
use common::resolution::ResolutionState;

pub enum Msg {
    VehicleInputChanged(String),
    Search,
    SearchSettled { ticket: u64, outcome: ResolutionState },
    SetType(Option<AddendumType>),
    DescriptionChanged(String),
    NotesChanged(String),
    AmountChanged(String),
    EffectiveDateChanged(String),
    Submit,
    SubmitSettled {
        category: VehicleCategory,
        result: Result<Option<String>, ConsoleError>,
    },
    Redirect,
    Reset,
}
