mod list_store;
mod survey_tally;

pub use list_store::{Keyed, ListStore};
pub use survey_tally::SurveyTally;
