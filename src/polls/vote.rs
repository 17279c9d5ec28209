use chrono::{DateTime, Utc};

use crate::error::{self, EngineError, ValidationError};
use crate::store::PollStore;
use super::id::Id;
use super::poll::{Poll, PollOption};

// Looks up the poll, applies the vote, and writes the replacement entity
// back through the store. An unknown poll id is a defined no-op, not an error.
pub fn vote(
    store: &PollStore,
    poll_id: &Id,
    option_id: &Id,
    now: DateTime<Utc>,
) -> Result<Option<Poll>, EngineError> {
    let Some(poll) = store.get_by_id(poll_id)? else {
        return Ok(None);
    };

    let updated = cast_vote(&poll, option_id, now)?;
    store.replace(&updated)?;
    Ok(Some(updated))
}

// The pure transition: a full copy of the poll with exactly one tally
// incremented and the local voted-here marker set.
fn cast_vote(poll: &Poll, option_id: &Id, now: DateTime<Utc>) -> Result<Poll, ValidationError> {
    if poll.is_expired(now) {
        return Err(error::vote_poll_expired(&poll.id));
    }
    if let Some(selected) = &poll.selected_option_id {
        return Err(error::vote_already_cast(&poll.id, selected));
    }
    if poll.option(option_id).is_none() {
        return Err(error::vote_invalid_option(&poll.id, option_id));
    }

    let mut updated = poll.clone();
    updated.options = poll.options.iter()
        .map(|option| {
            if option.id == *option_id {
                PollOption { votes: option.votes + 1, ..option.clone() }
            }
            else {
                option.clone()
            }
        })
        .collect();
    updated.selected_option_id = Some(option_id.clone());

    Ok(updated)
}
