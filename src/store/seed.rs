use chrono::{DateTime, Duration, Utc};

use crate::polls::{Id, Poll, PollOption, PollType};

// Example polls inserted once into an empty store, tallies included.
pub fn example_polls(now: DateTime<Utc>) -> Vec<Poll> {
    vec![
        example(
            now,
            "What's your favorite programming language?",
            &[("JavaScript", 42), ("Python", 38), ("TypeScript", 27), ("Rust", 15)],
            PollType::MultipleChoice,
            Duration::hours(1),
            Duration::hours(2),
            false,
            24,
            18,
        ),
        example(
            now,
            "Should we adopt a 4-day work week?",
            &[("Yes", 87), ("No", 13)],
            PollType::YesNo,
            Duration::hours(2),
            Duration::hours(1),
            true,
            56,
            42,
        ),
        example(
            now,
            "What platform do you use for remote team communication?",
            &[("Slack", 45), ("Microsoft Teams", 32), ("Discord", 18), ("Email", 5)],
            PollType::MultipleChoice,
            Duration::hours(3),
            Duration::hours(12),
            false,
            12,
            8,
        ),
        example(
            now,
            "Would you use AI tools in your daily workflow?",
            &[("Yes", 65), ("No", 35)],
            PollType::YesNo,
            Duration::hours(4),
            Duration::hours(20),
            false,
            32,
            24,
        ),
        example(
            now,
            "What's your preferred code editor?",
            &[("VS Code", 58), ("IntelliJ IDEA", 22), ("Sublime Text", 12), ("Vim", 8)],
            PollType::MultipleChoice,
            Duration::hours(5),
            Duration::hours(5),
            false,
            18,
            14,
        ),
    ]
}

fn example(
    now: DateTime<Utc>,
    question: &str,
    options: &[(&str, u32)],
    poll_type: PollType,
    age: Duration,
    remaining: Duration,
    hide_results: bool,
    trending_count: u32,
    like_count: u32,
) -> Poll {
    Poll {
        id: Id::new(),
        question: String::from(question),
        options: options.iter()
            .map(|(text, votes)| PollOption {
                id: Id::new(),
                text: String::from(*text),
                votes: *votes,
            })
            .collect(),
        poll_type,
        created_at: now - age,
        expires_at: now + remaining,
        hide_results,
        is_private: false,
        trending_count,
        like_count,
        selected_option_id: None,
    }
}
