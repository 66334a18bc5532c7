//! Agent construction from `kind[:args]` config strings.

use thiserror::Error;

use super::human::HumanAgent;
use super::llm::{ClientState, CompletionClient, LlmAgent, DEFAULT_MAX_ATTEMPTS, DEFAULT_MODEL};
use super::random::RandomAgent;
use super::Agent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentSpecError {
    #[error("empty agent spec")]
    Empty,
    #[error("unknown agent kind '{0}', expected human, random, or llm")]
    UnknownKind(String),
    #[error("invalid seed '{0}' in agent spec")]
    InvalidSeed(String),
    #[error("invalid attempt count '{0}' in agent spec")]
    InvalidAttempts(String),
}

/// A parsed agent seat description.
///
/// The grammar is `kind[:args]`:
///
/// - `human[:NAME]` seats a frontend-driven player, named `Human` when no
///   name is given.
/// - `random[:SEED]` seats the random bot; seed 0 or no seed draws from
///   entropy.
/// - `llm[:MODEL[,ATTEMPTS]]` seats the LLM bot with its defaults filled
///   in for missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentSpec {
    Human { name: String },
    Random { seed: u64 },
    Llm { model: String, max_attempts: u32 },
}

impl AgentSpec {
    pub fn parse(spec: &str) -> Result<AgentSpec, AgentSpecError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(AgentSpecError::Empty);
        }
        let (kind, args) = match spec.split_once(':') {
            Some((kind, args)) => (kind, Some(args.trim())),
            None => (spec, None),
        };
        let args = args.filter(|a| !a.is_empty());

        match kind.to_ascii_lowercase().as_str() {
            "human" => Ok(AgentSpec::Human {
                name: args.unwrap_or("Human").to_string(),
            }),
            "random" => {
                let seed = match args {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| AgentSpecError::InvalidSeed(raw.to_string()))?,
                    None => 0,
                };
                Ok(AgentSpec::Random { seed })
            }
            "llm" => {
                let (model, attempts) = match args {
                    Some(args) => match args.split_once(',') {
                        Some((model, attempts)) => (model.trim(), Some(attempts.trim())),
                        None => (args, None),
                    },
                    None => ("", None),
                };
                let model = if model.is_empty() { DEFAULT_MODEL } else { model };
                let max_attempts = match attempts {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| AgentSpecError::InvalidAttempts(raw.to_string()))?,
                    None => DEFAULT_MAX_ATTEMPTS,
                };
                Ok(AgentSpec::Llm { model: model.to_string(), max_attempts })
            }
            other => Err(AgentSpecError::UnknownKind(other.to_string())),
        }
    }

    /// Builds the boxed agent for this seat.
    ///
    /// LLM seats take ownership of the injected completion client; with
    /// `None` the agent starts in the failed-client state and plays every
    /// turn through its fallback.
    pub fn build(&self, llm_client: Option<Box<dyn CompletionClient>>) -> Box<dyn Agent> {
        match self {
            AgentSpec::Human { name } => Box::new(HumanAgent::new(name)),
            AgentSpec::Random { seed } => Box::new(RandomAgent::new(*seed)),
            AgentSpec::Llm { model, max_attempts } => {
                let client = match llm_client {
                    Some(client) => ClientState::Ready(client),
                    None => ClientState::Failed("no completion client configured".to_string()),
                };
                Box::new(LlmAgent::new(model, *max_attempts, client))
            }
        }
    }
}
