use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::error::{self, ValidationError};
use super::expiry::{self, ExpirationChoice};
use super::id::Id;

pub const QUESTION_LIMITS: RangeInclusive<usize> = 1..=140;
pub const OPTION_LIMITS: RangeInclusive<usize> = 2..=10;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PollType {
    MultipleChoice,
    YesNo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: Id,
    pub text: String,
    pub votes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: Id,
    pub question: String,
    pub options: Vec<PollOption>,

    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,

    pub hide_results: bool,
    pub is_private: bool,

    pub trending_count: u32,
    pub like_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_id: Option<Id>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollSettings {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "type")]
    pub poll_type: PollType,
    pub expiration_time: ExpirationChoice,
    #[serde(default)]
    pub hide_results: bool,
    #[serde(default)]
    pub is_private: bool,
}

impl Poll {
    pub fn new(settings: CreatePollSettings, now: DateTime<Utc>) -> Result<Poll, ValidationError> {
        let CreatePollSettings {
            question,
            options,
            poll_type,
            expiration_time,
            hide_results,
            is_private,
        } = settings;

        let question = question.trim().to_string();
        let question_len = question.chars().count();
        if !QUESTION_LIMITS.contains(&question_len) {
            return Err(error::poll_question_invalid_size(QUESTION_LIMITS, question_len));
        }

        // yes-no polls ignore the caller's option list entirely
        let texts = match poll_type {
            PollType::YesNo => vec![String::from("Yes"), String::from("No")],
            PollType::MultipleChoice => {
                if !OPTION_LIMITS.contains(&options.len()) {
                    return Err(error::poll_option_limit_exceeded(OPTION_LIMITS, options.len()));
                }
                let mut trimmed = Vec::with_capacity(options.len());
                for (index, text) in options.iter().enumerate() {
                    let text = text.trim();
                    if text.is_empty() {
                        return Err(error::poll_option_empty(index));
                    }
                    trimmed.push(text.to_string());
                }
                trimmed
            },
        };

        Ok(Poll {
            id: Id::new(),
            question,
            options: texts.into_iter()
                .map(|text| PollOption { id: Id::new(), text, votes: 0 })
                .collect(),
            poll_type,
            created_at: now,
            expires_at: now + expiration_time.duration(),
            hide_results,
            is_private,
            trending_count: 0,
            like_count: 0,
            selected_option_id: None,
        })
    }

    pub fn option(&self, option_id: &Id) -> Option<&PollOption> {
        self.options.iter().find(|option| option.id == *option_id)
    }

    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|option| option.votes).sum()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        expiry::is_expired(self.expires_at, now)
    }

    pub fn share_link(&self, origin: &str) -> String {
        format!("{origin}/poll/{}", self.id)
    }
}
