use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use super::expiry;
use super::id::Id;
use super::poll::{Poll, PollType};

// What a caller is allowed to see of a poll at a given instant. Tallies and
// percentages are withheld while the poll hides its results and this store
// has neither voted nor watched it expire.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PollView<'a> {
    pub id: &'a Id,
    pub question: &'a str,
    pub options: Vec<OptionView<'a>>,

    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,

    pub hide_results: bool,
    pub is_private: bool,

    pub trending_count: u32,
    pub like_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option_id: Option<&'a Id>,

    pub expired: bool,
    pub time_remaining: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_votes: Option<u32>,
    pub share_link: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OptionView<'a> {
    pub id: &'a Id,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

impl<'a> PollView<'a> {
    pub fn evaluate(poll: &'a Poll, origin: &str, now: DateTime<Utc>) -> PollView<'a> {
        let expired = poll.is_expired(now);
        let results_visible = !poll.hide_results
            || expired
            || poll.selected_option_id.is_some();
        let total = poll.total_votes();

        let options = poll.options.iter()
            .map(|option| OptionView {
                id: &option.id,
                text: &option.text,
                votes: results_visible.then_some(option.votes),
                percentage: results_visible.then_some(percentage(option.votes, total)),
            })
            .collect();

        PollView {
            id: &poll.id,
            question: &poll.question,
            options,
            poll_type: poll.poll_type,
            created_at: poll.created_at,
            expires_at: poll.expires_at,
            hide_results: poll.hide_results,
            is_private: poll.is_private,
            trending_count: poll.trending_count,
            like_count: poll.like_count,
            selected_option_id: poll.selected_option_id.as_ref(),
            expired,
            time_remaining: expiry::remaining_label(poll.expires_at, now),
            total_votes: results_visible.then_some(total),
            share_link: poll.share_link(origin),
        }
    }
}

fn percentage(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((votes as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum PollOrdering {
    #[default]
    All,
    Trending,
    Newest,
}

impl From<String> for PollOrdering {
    fn from(value: String) -> PollOrdering {
        match value.as_str() {
            "trending" => PollOrdering::Trending,
            "newest" => PollOrdering::Newest,
            _ => PollOrdering::All,
        }
    }
}

// The discovery listing: private polls stay reachable by direct link but are
// never listed, and expired polls drop out.
pub fn public_polls(polls: Vec<Poll>, ordering: PollOrdering, now: DateTime<Utc>) -> Vec<Poll> {
    let mut polls: Vec<Poll> = polls.into_iter()
        .filter(|poll| !poll.is_private && !poll.is_expired(now))
        .collect();

    match ordering {
        PollOrdering::All => {},
        PollOrdering::Trending => polls.sort_by(|a, b| b.trending_count.cmp(&a.trending_count)),
        PollOrdering::Newest => polls.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    polls
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use crate::polls::{CreatePollSettings, ExpirationChoice};
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    fn poll(question: &str) -> Poll {
        Poll::new(CreatePollSettings {
            question: String::from(question),
            options: vec![String::from("A"), String::from("B")],
            poll_type: PollType::MultipleChoice,
            expiration_time: ExpirationChoice::OneHour,
            hide_results: false,
            is_private: false,
        }, now()).unwrap()
    }

    #[test]
    fn hidden_results_are_withheld_until_a_vote_is_cast() {
        let mut hidden = poll("Hidden?");
        hidden.hide_results = true;
        hidden.options[0].votes = 3;
        hidden.options[1].votes = 1;

        let view = PollView::evaluate(&hidden, "http://localhost:3000", now());
        assert!(!view.expired);
        assert_eq!(view.total_votes, None);
        assert!(view.options.iter().all(|option| option.votes.is_none()));
        assert!(view.options.iter().all(|option| option.percentage.is_none()));

        // a recorded vote reveals them
        hidden.selected_option_id = Some(hidden.options[0].id.clone());
        let view = PollView::evaluate(&hidden, "http://localhost:3000", now());
        assert_eq!(view.total_votes, Some(4));
        assert_eq!(view.options[0].votes, Some(3));
        assert_eq!(view.options[0].percentage, Some(75));
        assert_eq!(view.options[1].percentage, Some(25));
    }

    #[test]
    fn expiry_reveals_hidden_results() {
        let mut hidden = poll("Hidden?");
        hidden.hide_results = true;
        hidden.options[0].votes = 2;

        let after_deadline = now() + Duration::hours(2);
        let view = PollView::evaluate(&hidden, "http://localhost:3000", after_deadline);
        assert!(view.expired);
        assert_eq!(view.time_remaining, "Expired");
        assert_eq!(view.total_votes, Some(2));
        assert_eq!(view.options[0].votes, Some(2));
    }

    #[test]
    fn percentages_survive_an_empty_tally() {
        let open = poll("No votes yet?");
        let view = PollView::evaluate(&open, "http://localhost:3000", now());
        assert_eq!(view.total_votes, Some(0));
        assert_eq!(view.options[0].percentage, Some(0));
    }

    #[test]
    fn listing_excludes_private_and_expired_polls() {
        let public = poll("Public?");
        let mut private = poll("Private?");
        private.is_private = true;
        let mut expired = poll("Expired?");
        expired.expires_at = now() - Duration::minutes(1);

        let listed = public_polls(vec![public.clone(), private, expired], PollOrdering::All, now());
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, public.id);
    }

    #[test]
    fn trending_ordering_sorts_by_reaction_count() {
        let mut quiet = poll("Quiet?");
        quiet.trending_count = 1;
        let mut loud = poll("Loud?");
        loud.trending_count = 40;

        let listed = public_polls(vec![quiet.clone(), loud.clone()], PollOrdering::Trending, now());
        assert_eq!(listed[0].id, loud.id);
        assert_eq!(listed[1].id, quiet.id);
    }

    #[test]
    fn newest_ordering_sorts_by_creation_time() {
        let mut old = poll("Old?");
        old.created_at = now() - Duration::hours(3);
        let new = poll("New?");

        let listed = public_polls(vec![old.clone(), new.clone()], PollOrdering::Newest, now());
        assert_eq!(listed[0].id, new.id);
        assert_eq!(listed[1].id, old.id);
    }

    #[test]
    fn unknown_ordering_falls_back_to_storage_order() {
        assert_eq!(PollOrdering::from(String::from("hottest")), PollOrdering::All);
    }
}
