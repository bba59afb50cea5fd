// ABOUTME: Workout plan service orchestrating the full plan synthesis pipeline
// ABOUTME: Profile lookup, source selection with template fallback, overload, assembly, save, recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Plan Service
//!
//! Generation runs once per `(user, week)`:
//!
//! 1. read the profile and pick the effective training days
//! 2. ask the primary source for a candidate, falling back to the template
//! 3. for weeks after the first, look up recent history for every exercise
//!    and decide progressive overload
//! 4. validate and assemble, then save
//!
//! Reading the current plan applies recovery adjustments to a copy; stored
//! plans are never rewritten.

use crate::database::{
    DailyLogRepository, ExerciseLogRepository, ProfileRepository, WorkoutPlanRepository,
};
use crate::errors::{AppError, AppResult};
use crate::logging::PlanLogger;
use crate::plan_sources::{CandidatePlan, PlanRequest, PlanSource, TemplatePlanSource};
use crate::services::plan_assembler::PlanAssembler;
use fitplan_core::models::StoredPlan;
use fitplan_intelligence::{
    weekly_adherence, OverloadCalculator, OverloadDecision, PlannerConfig, RecoveryAdjuster,
    RecoveryAssessment, TemplateGenerator, TrainingDaySelector,
};
use futures_util::future::join_all;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Repositories the service reads from and writes to
#[derive(Clone)]
pub struct PlanRepositories {
    /// Profile lookup
    pub profiles: Arc<dyn ProfileRepository>,
    /// Exercise history
    pub exercise_logs: Arc<dyn ExerciseLogRepository>,
    /// Daily recovery signals
    pub daily_logs: Arc<dyn DailyLogRepository>,
    /// Plan storage
    pub plans: Arc<dyn WorkoutPlanRepository>,
}

impl PlanRepositories {
    /// Use one store for every repository
    #[must_use]
    pub fn shared<D>(db: Arc<D>) -> Self
    where
        D: ProfileRepository
            + ExerciseLogRepository
            + DailyLogRepository
            + WorkoutPlanRepository
            + 'static,
    {
        Self {
            profiles: db.clone(),
            exercise_logs: db.clone(),
            daily_logs: db.clone(),
            plans: db,
        }
    }
}

/// Orchestrates plan generation and retrieval
pub struct WorkoutPlanService {
    repos: PlanRepositories,
    primary: Option<Arc<dyn PlanSource>>,
    fallback: TemplatePlanSource,
    selector: TrainingDaySelector,
    overload: OverloadCalculator,
    assembler: PlanAssembler,
    recovery: RecoveryAdjuster,
}

impl WorkoutPlanService {
    /// Create a service using the global planner configuration
    ///
    /// `primary` is tried first when present; the template source is always
    /// the fallback.
    #[must_use]
    pub fn new(repos: PlanRepositories, primary: Option<Arc<dyn PlanSource>>) -> Self {
        Self::with_config(repos, primary, PlannerConfig::global())
    }

    /// Create a service with explicit planner configuration
    #[must_use]
    pub fn with_config(
        repos: PlanRepositories,
        primary: Option<Arc<dyn PlanSource>>,
        config: &PlannerConfig,
    ) -> Self {
        let overload = OverloadCalculator::new(config.overload.clone());
        Self {
            repos,
            primary,
            fallback: TemplatePlanSource::new(TemplateGenerator::new(config.template.clone())),
            selector: TrainingDaySelector::new(config.training_days.clone()),
            assembler: PlanAssembler::new(overload.clone()),
            overload,
            recovery: RecoveryAdjuster::new(config.recovery.clone()),
        }
    }

    /// Generate, assemble, and store the plan for one week
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for week 0 or an invalid profile,
    /// `ResourceNotFound` when the user has no profile, `InvalidPlanShape` if
    /// the chosen week is malformed, and any error from saving the plan
    /// (including `ResourceAlreadyExists` for a week already issued)
    #[instrument(skip_all, fields(user_id = %user_id, week = week_number))]
    pub async fn generate_plan(&self, user_id: Uuid, week_number: u32) -> AppResult<StoredPlan> {
        if week_number == 0 {
            return Err(AppError::invalid_input("week_number must be at least 1")
                .with_user_id(user_id));
        }
        let profile = self
            .repos
            .profiles
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile").with_user_id(user_id))?;
        profile.validate()?;

        let training_days = self.selector.select(
            Some(profile.available_days_per_week),
            profile.activity_level,
        );
        let request = PlanRequest::from_profile(&profile, week_number, training_days);
        let candidate = self.candidate(&request).await;
        let source = candidate.source;
        let decisions = self.overload_decisions(&request, &candidate).await;

        let plan = self
            .assembler
            .assemble(&request, candidate, decisions.as_ref())?;
        let stored = self.repos.plans.save(plan).await?;

        PlanLogger::log_plan_generated(
            user_id,
            week_number,
            source.as_str(),
            stored.plan.training_day_count(),
        );
        Ok(stored)
    }

    /// Generate the week after the latest stored plan, or week 1
    ///
    /// # Errors
    ///
    /// Returns any error from [`Self::generate_plan`] or the plan lookup
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn generate_next_plan(&self, user_id: Uuid) -> AppResult<StoredPlan> {
        let next_week = self
            .repos
            .plans
            .find_latest(user_id)
            .await?
            .map_or(1, |latest| latest.plan.week_number + 1);
        self.generate_plan(user_id, next_week).await
    }

    /// Current plan with recovery adjustments applied to a copy
    ///
    /// Generates week 1 when the user has no plan yet.
    ///
    /// # Errors
    ///
    /// Returns any error from the plan lookup or from generating week 1
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn latest_plan(&self, user_id: Uuid) -> AppResult<StoredPlan> {
        if let Some(stored) = self.repos.plans.find_latest(user_id).await? {
            return Ok(self.with_recovery(stored).await);
        }
        debug!("No plan stored yet, generating week 1");
        let stored = self.generate_plan(user_id, 1).await?;
        Ok(self.with_recovery(stored).await)
    }

    /// Stored plan for one week, unadjusted
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no plan exists for that week
    pub async fn plan_by_week(&self, user_id: Uuid, week_number: u32) -> AppResult<StoredPlan> {
        self.repos
            .plans
            .find_by_week(user_id, week_number)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Workout plan for week {week_number}"))
                    .with_user_id(user_id)
                    .with_week(week_number)
            })
    }

    /// Every stored plan, ascending by week
    ///
    /// # Errors
    ///
    /// Returns any error from the plan store
    pub async fn all_plans(&self, user_id: Uuid) -> AppResult<Vec<StoredPlan>> {
        self.repos.plans.find_all(user_id).await
    }

    /// Recovery assessment over the recent daily logs
    ///
    /// # Errors
    ///
    /// Returns any error from the daily log store
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn recovery_status(&self, user_id: Uuid) -> AppResult<RecoveryAssessment> {
        let logs = self
            .repos
            .daily_logs
            .get_recent_daily_logs(user_id, self.recovery.window_days())
            .await?;
        Ok(self.recovery.assess(&logs))
    }

    /// Average completion score (0-100) for one week's exercise logs
    ///
    /// # Errors
    ///
    /// Returns any error from the exercise log store
    pub async fn weekly_adherence(&self, user_id: Uuid, week_number: u32) -> AppResult<u8> {
        let logs = self
            .repos
            .exercise_logs
            .get_week_logs(user_id, week_number)
            .await?;
        Ok(weekly_adherence(&logs))
    }

    async fn candidate(&self, request: &PlanRequest) -> CandidatePlan {
        if let Some(primary) = &self.primary {
            match primary.generate(request).await {
                Ok(candidate) => return candidate,
                Err(e) => PlanLogger::log_source_fallback(
                    request.user_id,
                    request.week_number,
                    primary.name(),
                    &e.to_string(),
                ),
            }
        }
        self.fallback.build(request)
    }

    /// Overload decisions keyed by exercise name
    ///
    /// `None` for week 1 or when the previous week has no logs. A failed
    /// lookup for one exercise leaves that exercise out of the map.
    async fn overload_decisions(
        &self,
        request: &PlanRequest,
        candidate: &CandidatePlan,
    ) -> Option<HashMap<String, OverloadDecision>> {
        if request.week_number <= 1 {
            return None;
        }
        let previous_week = request.week_number - 1;
        match self
            .repos
            .exercise_logs
            .get_week_logs(request.user_id, previous_week)
            .await
        {
            Ok(logs) if logs.is_empty() => {
                debug!(previous_week, "No logs for previous week, skipping overload");
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    user_id = %request.user_id,
                    previous_week,
                    error = %e,
                    "Previous week lookup failed, skipping overload"
                );
                return None;
            }
        }

        let names: BTreeSet<&str> = candidate
            .days
            .iter()
            .flat_map(|day| day.exercises.iter())
            .map(|entry| entry.name.as_str())
            .collect();
        let window = self.overload.history_window();
        let lookups = names.into_iter().map(|name| async move {
            let result = self
                .repos
                .exercise_logs
                .get_recent_logs(request.user_id, name, window)
                .await;
            (name, result)
        });

        let mut decisions = HashMap::new();
        for (name, result) in join_all(lookups).await {
            match result {
                Ok(logs) => {
                    decisions.insert(name.to_owned(), self.overload.decide(&logs));
                }
                Err(e) => {
                    PlanLogger::log_overload_lookup_failed(request.user_id, name, &e.to_string());
                }
            }
        }
        Some(decisions)
    }

    async fn with_recovery(&self, stored: StoredPlan) -> StoredPlan {
        let logs = match self
            .repos
            .daily_logs
            .get_recent_daily_logs(stored.plan.user_id, self.recovery.window_days())
            .await
        {
            Ok(logs) => logs,
            Err(e) => {
                warn!(
                    user_id = %stored.plan.user_id,
                    error = %e,
                    "Daily log lookup failed, returning plan unadjusted"
                );
                return stored;
            }
        };
        if let Some(adjusted) = self.recovery.adjust(&stored.plan, &logs) {
            return StoredPlan {
                plan: adjusted,
                ..stored
            };
        }
        stored
    }
}
