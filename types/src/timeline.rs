//! Ordered progress phases and their derived status.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub id: u32,
    pub label: String,
    /// Display position along the track, `0..=100`.
    pub position_percent: f32,
}

impl Phase {
    #[must_use]
    pub fn new(id: u32, label: impl Into<String>, position_percent: f32) -> Self {
        Self {
            id,
            label: label.into(),
            position_percent,
        }
    }

    /// Status is derived from the externally driven step, never stored.
    #[must_use]
    pub fn status(&self, current_step: u32) -> PhaseStatus {
        match self.id.cmp(&current_step) {
            std::cmp::Ordering::Less => PhaseStatus::Completed,
            std::cmp::Ordering::Equal => PhaseStatus::Active,
            std::cmp::Ordering::Greater => PhaseStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimelineError {
    #[error("timeline needs at least one phase")]
    Empty,
    #[error("phase {id} position {position} is outside 0..=100")]
    PositionOutOfRange { id: u32, position: f32 },
    #[error("phase {id} position {position} comes before previous position {previous}")]
    NonMonotonic {
        id: u32,
        position: f32,
        previous: f32,
    },
    #[error("phase id {id} does not increase over previous id {previous}")]
    IdsNotIncreasing { id: u32, previous: u32 },
}

/// A fixed, validated sequence of phases.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    phases: Vec<Phase>,
}

impl Timeline {
    /// Validate and freeze the sequence. Bad input is rejected, never clamped.
    pub fn new(phases: Vec<Phase>) -> Result<Self, TimelineError> {
        if phases.is_empty() {
            return Err(TimelineError::Empty);
        }

        let mut previous: Option<&Phase> = None;
        for phase in &phases {
            let position = phase.position_percent;
            if !(0.0..=100.0).contains(&position) {
                return Err(TimelineError::PositionOutOfRange {
                    id: phase.id,
                    position,
                });
            }
            if let Some(prev) = previous {
                if phase.id <= prev.id {
                    return Err(TimelineError::IdsNotIncreasing {
                        id: phase.id,
                        previous: prev.id,
                    });
                }
                if position < prev.position_percent {
                    return Err(TimelineError::NonMonotonic {
                        id: phase.id,
                        position,
                        previous: prev.position_percent,
                    });
                }
            }
            previous = Some(phase);
        }

        Ok(Self { phases })
    }

    /// The four checkpoints shown under the thinking visualization.
    pub fn thinking_checkpoints() -> Result<Self, TimelineError> {
        Self::new(vec![
            Phase::new(1, "Reading", 0.0),
            Phase::new(2, "Analyzing", 33.0),
            Phase::new(3, "Extracting Ideas", 66.0),
            Phase::new(4, "Finalizing", 100.0),
        ])
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn statuses(&self, current_step: u32) -> impl Iterator<Item = (&Phase, PhaseStatus)> {
        self.phases
            .iter()
            .map(move |phase| (phase, phase.status(current_step)))
    }

    #[must_use]
    pub fn active(&self, current_step: u32) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.id == current_step)
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, PhaseStatus, Timeline, TimelineError};

    fn four_phase() -> Timeline {
        Timeline::new(vec![
            Phase::new(0, "a", 0.0),
            Phase::new(1, "b", 33.0),
            Phase::new(2, "c", 66.0),
            Phase::new(3, "d", 100.0),
        ])
        .expect("valid timeline")
    }

    #[test]
    fn boundary_statuses() {
        let timeline = four_phase();
        let statuses: Vec<_> = timeline.statuses(3).map(|(_, s)| s).collect();
        assert_eq!(
            statuses,
            vec![
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::Active,
            ]
        );

        let statuses: Vec<_> = timeline.statuses(2).map(|(_, s)| s).collect();
        assert_eq!(
            statuses,
            vec![
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::Active,
                PhaseStatus::Pending,
            ]
        );
    }

    #[test]
    fn exactly_one_active_and_never_both() {
        let timeline = four_phase();
        for step in 0..4 {
            let active = timeline
                .statuses(step)
                .filter(|(_, s)| *s == PhaseStatus::Active)
                .count();
            assert_eq!(active, 1);
            assert_eq!(timeline.active(step).map(|p| p.id), Some(step));
        }
    }

    #[test]
    fn step_past_end_completes_everything() {
        let timeline = four_phase();
        assert!(
            timeline
                .statuses(9)
                .all(|(_, s)| s == PhaseStatus::Completed)
        );
    }

    #[test]
    fn rejects_non_monotonic_positions() {
        let err = Timeline::new(vec![Phase::new(1, "a", 50.0), Phase::new(2, "b", 40.0)])
            .unwrap_err();
        assert!(matches!(err, TimelineError::NonMonotonic { id: 2, .. }));
    }

    #[test]
    fn rejects_out_of_range_and_empty() {
        assert_eq!(Timeline::new(Vec::new()).unwrap_err(), TimelineError::Empty);
        assert!(matches!(
            Timeline::new(vec![Phase::new(1, "a", 120.0)]).unwrap_err(),
            TimelineError::PositionOutOfRange { id: 1, .. }
        ));
    }

    #[test]
    fn rejects_repeated_ids() {
        let err =
            Timeline::new(vec![Phase::new(1, "a", 0.0), Phase::new(1, "b", 10.0)]).unwrap_err();
        assert!(matches!(err, TimelineError::IdsNotIncreasing { .. }));
    }

    #[test]
    fn equal_positions_are_allowed() {
        assert!(Timeline::new(vec![Phase::new(1, "a", 50.0), Phase::new(2, "b", 50.0)]).is_ok());
    }

    #[test]
    fn checkpoint_indices_at_step_three() {
        // Checkpoint ids start at 1, so step 3 leaves indices 0 and 1 done.
        let timeline = Timeline::thinking_checkpoints().expect("valid timeline");
        let statuses: Vec<_> = timeline.statuses(3).map(|(_, s)| s).collect();
        assert_eq!(
            statuses,
            vec![
                PhaseStatus::Completed,
                PhaseStatus::Completed,
                PhaseStatus::Active,
                PhaseStatus::Pending,
            ]
        );
    }

    #[test]
    fn checkpoints_are_valid() {
        let builtin = Timeline::thinking_checkpoints().expect("valid timeline");
        let ids: Vec<_> = builtin.phases().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
        assert_eq!(builtin.phases()[3].position_percent, 100.0);
    }
}
