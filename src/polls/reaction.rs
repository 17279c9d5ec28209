use serde::{Serialize, Deserialize};

use crate::error::EngineError;
use crate::store::PollStore;
use super::id::Id;
use super::poll::Poll;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Trending,
    Like,
}

// Reactions are an unthrottled tally: no dedup, no expiry check, repeatable
// without limit, unlike votes.
pub fn react(store: &PollStore, poll_id: &Id, kind: ReactionKind) -> Result<Option<Poll>, EngineError> {
    let Some(poll) = store.get_by_id(poll_id)? else {
        return Ok(None);
    };

    let updated = add_reaction(&poll, kind);
    store.replace(&updated)?;
    Ok(Some(updated))
}

fn add_reaction(poll: &Poll, kind: ReactionKind) -> Poll {
    let mut updated = poll.clone();
    match kind {
        ReactionKind::Trending => updated.trending_count += 1,
        ReactionKind::Like => updated.like_count += 1,
    }
    updated
}
