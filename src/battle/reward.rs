//! Reward workflow: validate -> fetch ratings -> resolve winner -> compute ->
//! persist -> respond. Stateless between calls; all sharing goes through the
//! rating store.

use std::{sync::Arc, time::Duration};

use chrono::Utc;

use crate::{
    battle::{
        scoring,
        types::{Team, UserRating},
    },
    db::RatingStore,
    error::{RewardError, StoreError},
    protocol::{RewardItem, RewardRequest, RewardResponse, TEAMS_PER_BATTLE},
};

#[derive(Clone)]
pub struct RewardService {
    store: Arc<dyn RatingStore>,
    deadline: Option<Duration>,
}

impl RewardService {
    pub fn new(store: Arc<dyn RatingStore>) -> Self {
        Self {
            store,
            deadline: None,
        }
    }

    /// Bound every workflow run; on expiry the remaining steps (including the
    /// write) are dropped.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Apply a battle result and return old/new ratings in team order.
    pub async fn create_reward(
        &self,
        battle_id: &str,
        req: &RewardRequest,
    ) -> Result<RewardResponse, RewardError> {
        match self.deadline {
            Some(limit) => tokio::time::timeout(limit, self.run(battle_id, req))
                .await
                .map_err(|_| RewardError::Timeout)?,
            None => self.run(battle_id, req).await,
        }
    }

    async fn run(
        &self,
        battle_id: &str,
        req: &RewardRequest,
    ) -> Result<RewardResponse, RewardError> {
        let updated_at = Utc::now().timestamp();

        if let Err(errs) = req.validate() {
            log::debug!("battle {battle_id}: rejected reward request: {errs:?}");
            return Err(RewardError::Validation(errs));
        }
        let teams = team_pair(req)?;

        let current = self.list_ratings(teams).await?;

        let outcome = req.resolve_winner();
        let updated = scoring::compute_update(&current, outcome.index());

        self.store.batch_update(&updated).await?;

        let rewards = current
            .iter()
            .zip(updated.iter())
            .map(|(old, new)| RewardItem {
                user_id: new.user_id.clone(),
                old_rating: old.rating,
                new_rating: new.rating,
                updated_at,
            })
            .collect();

        log::info!(
            "battle {battle_id}: {} -> {}/{} vs {}/{}",
            outcome.as_str(),
            updated[0].user_id,
            updated[0].rating,
            updated[1].user_id,
            updated[1].rating
        );

        Ok(RewardResponse { rewards })
    }

    /// Sequential, in team order; the first failure aborts the rest.
    async fn list_ratings(&self, teams: &[Team; 2]) -> Result<[UserRating; 2], StoreError> {
        let first = self.store.get_rating(&teams[0].owner).await?;
        let second = self.store.get_rating(&teams[1].owner).await?;
        Ok([first, second])
    }
}

fn team_pair(req: &RewardRequest) -> Result<&[Team; 2], RewardError> {
    req.teams().try_into().map_err(|_| {
        RewardError::Validation(vec![format!("teams must be equals to {TEAMS_PER_BATTLE}")])
    })
}
