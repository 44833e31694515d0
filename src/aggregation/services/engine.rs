//! Aggregation service.

use crate::aggregation::domain::{
    AggregationConfig,
    DashboardStats,
    ProgressPeriod,
    ProgressPoint,
    TeamStats,
    compute_dashboard_stats,
    compute_progress_series,
    compute_team_stats,
};
use crate::error::ErrorKind;
use crate::schema::ValidationError;
use crate::task::ports::{TaskFilter, TaskRepository, TaskRepositoryError};
use crate::user::ports::{UserRepository, UserRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while computing derived views.
#[derive(Debug, Error)]
pub enum AggregationError {
    /// The requested period is not supported.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Loading tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Loading users failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
}

impl AggregationError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Tasks(_) | Self::Users(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Read-only dashboard view service.
pub struct AggregationService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    users: Arc<U>,
    clock: Arc<C>,
    config: AggregationConfig,
}

impl<T, U, C> Clone for AggregationService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
            config: self.config,
        }
    }
}

impl<T, U, C> AggregationService<T, U, C>
where
    T: TaskRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default windows.
    #[must_use]
    pub fn new(tasks: Arc<T>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            users,
            clock,
            config: AggregationConfig::default(),
        }
    }

    /// Replaces the aggregation windows.
    #[must_use]
    pub const fn with_config(mut self, config: AggregationConfig) -> Self {
        self.config = config;
        self
    }

    /// Counts tasks for the dashboard header.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::Tasks`] when the snapshot cannot be
    /// loaded.
    pub async fn dashboard_stats(&self) -> AggregationResult<DashboardStats> {
        let tasks = self.tasks.list(TaskFilter::All).await?;
        let stats = compute_dashboard_stats(&tasks, self.clock.utc(), &self.config);
        tracing::debug!(
            total_tasks = stats.total_tasks,
            in_progress = stats.in_progress,
            completed = stats.completed,
            due_soon = stats.due_soon,
            "dashboard stats computed"
        );
        Ok(stats)
    }

    /// Computes headcount figures.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::Users`] when the snapshot cannot be
    /// loaded.
    pub async fn team_stats(&self) -> AggregationResult<TeamStats> {
        let users = self.users.list_all().await?;
        let stats = compute_team_stats(&users, self.clock.utc(), &self.config);
        tracing::debug!(
            total_users = stats.total_users,
            active_users = stats.active_users,
            recent_joins = stats.recent_joins,
            "team stats computed"
        );
        Ok(stats)
    }

    /// Builds the progress chart for the trailing `period_days` days.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::Validation`] unless `period_days` is 7,
    /// 30, or 90, or [`AggregationError::Tasks`] when the snapshot cannot be
    /// loaded.
    pub async fn progress_series(&self, period_days: u32) -> AggregationResult<Vec<ProgressPoint>> {
        let period = ProgressPeriod::try_from(period_days)?;
        let tasks = self.tasks.list(TaskFilter::All).await?;
        let series = compute_progress_series(&tasks, period, self.clock.utc().date_naive());
        tracing::debug!(days = period.days(), points = series.len(), "progress series computed");
        Ok(series)
    }
}
