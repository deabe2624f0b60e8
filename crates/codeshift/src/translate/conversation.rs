use crate::prelude::*;
use codeshift_core::prompt::{is_terminated, reflection_message, revision_message, strip_sentinel};
use rig::agent::Agent;
use rig::completion::{CompletionModel, Prompt};

/// A conversation role that can answer one message.
///
/// Production roles are rig agents; tests use scripted responders so the
/// state machine can run without a model endpoint.
#[allow(async_fn_in_trait)]
pub trait Responder {
    async fn reply(&self, message: &str) -> Result<String>;
}

impl<M: CompletionModel> Responder for Agent<M> {
    async fn reply(&self, message: &str) -> Result<String> {
        self.prompt(message)
            .await
            .map_err(|e| eyre!(Error::Model(e.to_string())))
    }
}

/// Where the exchange stands after the last message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConversationState {
    AwaitingTranslation,
    AwaitingCritique,
    Done,
}

/// The two-role translate/critique exchange for a single file.
///
/// The translator answers the task; after every translator turn the critic
/// reviews the result once; its feedback is sent back to the translator as a
/// revision request. The exchange ends when the termination sentinel appears
/// in any message or when the translator turn budget is exhausted, and
/// yields the text of the final translator message.
pub struct Conversation<T: Responder, C: Responder> {
    pub(super) translator: T,
    pub(super) critic: C,
    max_turns: usize,
}

/// Top-level translator turns per file: one translation and one revision.
pub const DEFAULT_MAX_TURNS: usize = 2;

impl<T: Responder, C: Responder> Conversation<T, C> {
    pub fn new(translator: T, critic: C) -> Self {
        Self {
            translator,
            critic,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    #[cfg(test)]
    fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Drive the exchange for one task. One attempt only; any endpoint
    /// failure propagates to the caller.
    pub async fn run(&self, task: &str) -> Result<String> {
        let mut state = ConversationState::AwaitingTranslation;
        let mut outgoing = task.to_string();
        let mut translation = String::new();
        let mut turns = 0;

        loop {
            match state {
                ConversationState::AwaitingTranslation => {
                    translation = self.translator.reply(&outgoing).await?;
                    turns += 1;

                    state = if turns >= self.max_turns || is_terminated(&translation) {
                        ConversationState::Done
                    } else {
                        ConversationState::AwaitingCritique
                    };
                }
                ConversationState::AwaitingCritique => {
                    let feedback = self.critic.reply(&reflection_message(&translation)).await?;

                    state = if is_terminated(&feedback) {
                        ConversationState::Done
                    } else {
                        outgoing = revision_message(&feedback);
                        ConversationState::AwaitingTranslation
                    };
                }
                ConversationState::Done => return Ok(strip_sentinel(&translation)),
            }
        }
    }
}
