//! Hotness scoring and ordering of collected repositories.
//!
//! Hotness blends two signals: an exponentially decayed recency term from
//! the last push, and a popularity term normalizing watchers by repository
//! age. Recently active, broadly watched repositories score highest.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::error::InvalidRecordError;
use crate::repo::Repo;
use crate::Result;

/// Decay applied to the last-push age, per millisecond of delta.
/// Tuned so the recency contribution halves roughly every week.
pub const DECAY_PER_MS: f64 = 1.146e-9;

/// Weight of the recency term.
pub const PUSH_WEIGHT: f64 = 1.0;

/// Weight of the age-normalized watcher term.
pub const WATCHER_WEIGHT: f64 = 1.314e7;

/// Tunable weights for the hotness formula.
#[derive(Debug, Clone, Copy)]
pub struct HotnessWeights {
    /// Multiplier on the recency term.
    pub push: f64,
    /// Multiplier on the watchers-per-age term.
    pub watchers: f64,
    /// Exponential decay constant, per millisecond.
    pub decay_per_ms: f64,
}

impl Default for HotnessWeights {
    fn default() -> Self {
        Self {
            push: PUSH_WEIGHT,
            watchers: WATCHER_WEIGHT,
            decay_per_ms: DECAY_PER_MS,
        }
    }
}

/// Options controlling a ranking run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankOptions {
    /// Fail the whole ranking on the first invalid record instead of
    /// excluding it.
    pub strict: bool,

    /// Weights for the hotness formula.
    pub weights: HotnessWeights,
}

/// A repository annotated with its hotness score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRepo {
    /// The underlying record.
    #[serde(flatten)]
    pub repo: Repo,

    /// Derived composite score. Always finite.
    pub hotness: f64,
}

/// A record excluded from ranking, with the reason.
#[derive(Debug)]
pub struct Rejected {
    /// The excluded record.
    pub repo: Repo,
    /// Why it was excluded.
    pub reason: InvalidRecordError,
}

/// The annotated record set, exposing both orderings over the same data.
#[derive(Debug)]
pub struct Ranking {
    ranked: Vec<RankedRepo>,
    rejected: Vec<Rejected>,
}

impl Ranking {
    /// Annotate `repos` with hotness computed against a single `now`.
    ///
    /// The same `now` is used for every record: sampling the clock per
    /// record (or worse, per term) makes scores incomparable.
    ///
    /// # Errors
    ///
    /// In strict mode the first record with a degenerate age or non-finite
    /// score fails the run. Otherwise such records are excluded, logged,
    /// and reported via [`Ranking::rejected`].
    pub fn new(repos: Vec<Repo>, now: DateTime<Utc>, options: RankOptions) -> Result<Self> {
        let mut ranked = Vec::with_capacity(repos.len());
        let mut rejected = Vec::new();

        for repo in repos {
            match hotness(&repo, now, &options.weights) {
                Ok(score) => ranked.push(RankedRepo {
                    repo,
                    hotness: score,
                }),
                Err(reason) if options.strict => return Err(reason.into()),
                Err(reason) => {
                    warn!(repo = %repo.name, %reason, "excluding repository from ranking");
                    rejected.push(Rejected { repo, reason });
                }
            }
        }

        Ok(Self { ranked, rejected })
    }

    /// Rank with the current time, sampled once for the whole run.
    pub fn now(repos: Vec<Repo>, options: RankOptions) -> Result<Self> {
        Self::new(repos, Utc::now(), options)
    }

    /// The record set ordered by descending hotness.
    ///
    /// Every score is finite, so the comparator is total; tie order is
    /// unspecified.
    pub fn by_hotness(&self) -> Vec<&RankedRepo> {
        let mut ordered: Vec<_> = self.ranked.iter().collect();
        ordered.sort_by(|a, b| b.hotness.total_cmp(&a.hotness));
        ordered
    }

    /// The same record set ordered by most recent push.
    pub fn by_recency(&self) -> Vec<&RankedRepo> {
        let mut ordered: Vec<_> = self.ranked.iter().collect();
        ordered.sort_by(|a, b| b.repo.pushed_at.cmp(&a.repo.pushed_at));
        ordered
    }

    /// Number of ranked records.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true if no records were ranked.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Records excluded from the ranking, with reasons.
    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }
}

/// Compute the hotness of a single record against `now`.
fn hotness(
    repo: &Repo,
    now: DateTime<Utc>,
    weights: &HotnessWeights,
) -> std::result::Result<f64, InvalidRecordError> {
    let push_delta_ms = (now - repo.pushed_at).num_milliseconds() as f64;
    let created_delta_ms = (now - repo.created_at).num_milliseconds() as f64;

    // A zero or negative age is a division singularity, not a hot repo.
    if created_delta_ms <= 0.0 {
        return Err(InvalidRecordError::DegenerateAge {
            repo: repo.name.clone(),
        });
    }

    let recency = weights.push * (-weights.decay_per_ms * push_delta_ms).exp();
    let popularity = weights.watchers * repo.watchers as f64 / created_delta_ms;
    let score = recency + popularity;

    if !score.is_finite() {
        return Err(InvalidRecordError::NonFiniteHotness {
            repo: repo.name.clone(),
        });
    }

    Ok(score)
}
