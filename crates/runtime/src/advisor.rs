//! Failure isolation around the advisory provider.
//!
//! The provider runs on its own task under a deadline. Errors, timeouts and
//! panics all collapse into [`Advice::Unavailable`], so a broken provider can
//! never block or fail a turn.
use std::sync::Arc;
use std::time::Duration;

use crate::api::{AdvisoryError, AdvisoryProvider, AdvisoryRequest, Suggestion};

/// Outcome of asking for advice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advice {
    Available(Suggestion),
    Unavailable { reason: String },
}

impl Advice {
    pub fn suggestion(&self) -> Option<&Suggestion> {
        match self {
            Advice::Available(suggestion) => Some(suggestion),
            Advice::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Advice::Available(_))
    }
}

/// Wraps an optional provider with a timeout.
#[derive(Clone)]
pub struct Advisor {
    provider: Option<Arc<dyn AdvisoryProvider>>,
    timeout: Duration,
}

impl Advisor {
    pub fn new(provider: Arc<dyn AdvisoryProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// Advisor without a provider. Every request is unavailable.
    pub fn disabled() -> Self {
        Self {
            provider: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn advise(&self, request: &AdvisoryRequest) -> Advice {
        let Some(provider) = self.provider.clone() else {
            return Advice::Unavailable {
                reason: "no advisory provider configured".to_string(),
            };
        };

        match self.run(provider, request.clone()).await {
            Ok(suggestion) => {
                tracing::debug!(turn = request.turn, action = %suggestion.suggested_action, "advice ready");
                Advice::Available(suggestion)
            }
            Err(err) => {
                tracing::warn!(turn = request.turn, error = %err, "advice unavailable");
                Advice::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn run(
        &self,
        provider: Arc<dyn AdvisoryProvider>,
        request: AdvisoryRequest,
    ) -> Result<Suggestion, AdvisoryError> {
        let mut task = tokio::spawn(async move { provider.suggest(&request).await });

        match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => joined.map_err(AdvisoryError::Aborted)?,
            Err(_) => {
                task.abort();
                Err(AdvisoryError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use duel_core::{Character, DuelState, Race, RuleTable};

    use super::*;
    use crate::api::HeuristicAdvisor;

    struct Failing;

    #[async_trait]
    impl AdvisoryProvider for Failing {
        async fn suggest(&self, _: &AdvisoryRequest) -> Result<Suggestion, AdvisoryError> {
            Err(AdvisoryError::Provider("model offline".to_string()))
        }
    }

    struct Sleepy;

    #[async_trait]
    impl AdvisoryProvider for Sleepy {
        async fn suggest(&self, _: &AdvisoryRequest) -> Result<Suggestion, AdvisoryError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(AdvisoryError::Provider("unreachable".to_string()))
        }
    }

    struct Panicking;

    #[async_trait]
    impl AdvisoryProvider for Panicking {
        async fn suggest(&self, _: &AdvisoryRequest) -> Result<Suggestion, AdvisoryError> {
            panic!("provider bug")
        }
    }

    fn request() -> AdvisoryRequest {
        let state = DuelState::new(
            Character::new("a", "Ada", Race::Human),
            Character::new("b", "Bran", Race::Orc),
            5,
        );
        AdvisoryRequest::for_active(&state, &RuleTable::default())
    }

    #[tokio::test]
    async fn heuristic_advice_is_available() {
        let advisor = Advisor::new(
            Arc::new(HeuristicAdvisor::new(RuleTable::default())),
            Duration::from_secs(1),
        );
        assert!(advisor.advise(&request()).await.is_available());
    }

    #[tokio::test]
    async fn provider_errors_degrade() {
        let advisor = Advisor::new(Arc::new(Failing), Duration::from_secs(1));
        let advice = advisor.advise(&request()).await;
        assert_eq!(
            advice,
            Advice::Unavailable {
                reason: "advisory provider failed: model offline".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let advisor = Advisor::new(Arc::new(Sleepy), Duration::from_millis(50));
        let advice = advisor.advise(&request()).await;
        assert!(advice.suggestion().is_none());
        match advice {
            Advice::Unavailable { reason } => assert!(reason.contains("did not answer")),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn panicking_provider_degrades() {
        let advisor = Advisor::new(Arc::new(Panicking), Duration::from_secs(1));
        assert!(!advisor.advise(&request()).await.is_available());
    }

    #[tokio::test]
    async fn disabled_advisor_is_unavailable() {
        assert!(!Advisor::disabled().advise(&request()).await.is_available());
    }
}
