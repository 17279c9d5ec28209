mod expiry;
mod id;
mod poll;
mod poll_view;
mod reaction;
mod vote;

pub use expiry::{is_expired, remaining_label, ExpirationChoice};
pub use id::Id;
pub use poll::{CreatePollSettings, Poll, PollOption, PollType};
pub use poll_view::{public_polls, OptionView, PollOrdering, PollView};
pub use reaction::{react, ReactionKind};
pub use vote::vote;
