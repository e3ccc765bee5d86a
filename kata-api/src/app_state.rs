use crate::{
    domain::models::{Booking, CalendarEvent, Expense, Note, Recipe, SurveyOption, TaskItem},
    stores::{ListStore, SurveyTally},
};

#[derive(Clone)]
pub struct AppState {
    pub tasks: ListStore<TaskItem>,
    pub expenses: ListStore<Expense>,
    pub bookings: ListStore<Booking>,
    pub notes: ListStore<Note>,
    pub events: ListStore<CalendarEvent>,
    pub recipes: ListStore<Recipe>,
    pub survey: SurveyTally,
}

impl AppState {
    pub fn new() -> Self {
        let survey = SurveyTally::new(
            "What is your favorite programming language?",
            vec![
                SurveyOption::new("Rust"),
                SurveyOption::new("Go"),
                SurveyOption::new("Python"),
                SurveyOption::new("TypeScript"),
            ],
        );

        Self {
            tasks: ListStore::new(),
            expenses: ListStore::new(),
            bookings: ListStore::new(),
            notes: ListStore::new(),
            events: ListStore::new(),
            recipes: ListStore::new(),
            survey,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
