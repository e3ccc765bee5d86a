use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::SurveyOption;

/// Vote counters for a fixed set of options. Options are defined once at
/// process start and never added to or removed from.
#[derive(Clone)]
pub struct SurveyTally {
    question: Arc<str>,
    options: Arc<RwLock<Vec<SurveyOption>>>,
}

impl SurveyTally {
    pub fn new(question: impl Into<String>, options: Vec<SurveyOption>) -> Self {
        Self {
            question: question.into().into(),
            options: Arc::new(RwLock::new(options)),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub async fn options(&self) -> Vec<SurveyOption> {
        self.options.read().await.clone()
    }

    /// Count a vote for the given option. An unknown id is silently ignored.
    pub async fn vote(&self, option_id: Uuid) -> bool {
        let mut options = self.options.write().await;
        match options.iter_mut().find(|option| option.id == option_id) {
            Some(option) => {
                option.votes += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally() -> SurveyTally {
        SurveyTally::new(
            "Favorite language?",
            vec![SurveyOption::new("Rust"), SurveyOption::new("Go")],
        )
    }

    #[tokio::test]
    async fn vote_increments_only_the_matching_option() {
        let tally = tally();
        let rust_id = tally.options().await[0].id;

        assert!(tally.vote(rust_id).await);

        let options = tally.options().await;
        assert_eq!(options[0].votes, 1);
        assert_eq!(options[1].votes, 0);
    }

    #[tokio::test]
    async fn vote_with_unknown_id_changes_nothing() {
        let tally = tally();

        assert!(!tally.vote(Uuid::new_v4()).await);

        assert!(tally.options().await.iter().all(|o| o.votes == 0));
    }

    #[tokio::test]
    async fn repeat_votes_keep_counting() {
        let tally = tally();
        let go_id = tally.options().await[1].id;

        for _ in 0..3 {
            tally.vote(go_id).await;
        }

        assert_eq!(tally.options().await[1].votes, 3);
    }
}
