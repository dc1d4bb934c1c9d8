//! # Selection State Machine
//!
//! The pure transition rules of a session. Catalog reads happen outside, in the
//! [`SelectionActor`](super::SelectionActor), which passes their results in.
//!
//! ```text
//! Idle -> PickingParticipants -> Filtering -> Choosing -> VetoPending -> Accepted
//!                                    ^            |            |  ^
//!                                    |            +-(1 match)--+--+--> Accepted
//!                                    +---- every candidate vetoed -----+
//! ```
//!
//! Every method either applies the whole transition or returns an error and leaves the
//! state exactly as it was.

use super::error::SelectionError;
use super::filter::{FilterField, RestaurantFilter};
use super::state::{Notice, Participant, Phase, SelectionState};
use crate::model::{Person, PersonKey, Restaurant};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashSet;

/// An input from the presentation layer to the workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    StartSelection,
    ToggleParticipant(PersonKey),
    ConfirmParticipants,
    SetFilter { field: FilterField, value: String },
    ConfirmFilter,
    RandomChoose,
    Accept,
    Veto(PersonKey),
    /// Abandon or finish the session.
    Reset,
}

impl SelectionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::StartSelection => "StartSelection",
            SelectionEvent::ToggleParticipant(_) => "ToggleParticipant",
            SelectionEvent::ConfirmParticipants => "ConfirmParticipants",
            SelectionEvent::SetFilter { .. } => "SetFilter",
            SelectionEvent::ConfirmFilter => "ConfirmFilter",
            SelectionEvent::RandomChoose => "RandomChoose",
            SelectionEvent::Accept => "Accept",
            SelectionEvent::Veto(_) => "Veto",
            SelectionEvent::Reset => "Reset",
        }
    }

    /// The phase this event applies in. `None` means any phase.
    fn phase(&self) -> Option<Phase> {
        match self {
            SelectionEvent::StartSelection => Some(Phase::Idle),
            SelectionEvent::ToggleParticipant(_) | SelectionEvent::ConfirmParticipants => {
                Some(Phase::PickingParticipants)
            }
            SelectionEvent::SetFilter { .. } | SelectionEvent::ConfirmFilter => {
                Some(Phase::Filtering)
            }
            SelectionEvent::RandomChoose => Some(Phase::Choosing),
            SelectionEvent::Accept | SelectionEvent::Veto(_) => Some(Phase::VetoPending),
            SelectionEvent::Reset => None,
        }
    }
}

/// Uniform random index into a collection of `len` items.
pub fn pick_uniform(rng: &mut impl Rng, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}

fn invalid(event: &'static str, state: Phase) -> SelectionError {
    SelectionError::InvalidEvent { event, state }
}

/// One session's state plus the random source used for choosing.
#[derive(Debug)]
pub struct SelectionMachine {
    state: SelectionState,
    rng: StdRng,
}

impl SelectionMachine {
    pub fn new(rng: StdRng) -> Self {
        Self {
            state: SelectionState::Idle,
            rng,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Reject an event that does not apply in the current phase.
    pub fn check(&self, event: &SelectionEvent) -> Result<(), SelectionError> {
        match event.phase() {
            Some(phase) if phase != self.state.phase() => {
                Err(invalid(event.name(), self.state.phase()))
            }
            _ => Ok(()),
        }
    }

    /// Idle -> PickingParticipants, with nobody selected.
    pub fn start(
        &mut self,
        people: Vec<Person>,
        restaurant_count: usize,
    ) -> Result<(), SelectionError> {
        self.check(&SelectionEvent::StartSelection)?;
        if people.is_empty() {
            return Err(SelectionError::NoPeople);
        }
        if restaurant_count == 0 {
            return Err(SelectionError::NoRestaurants);
        }
        self.state = SelectionState::PickingParticipants {
            people,
            selected: HashSet::new(),
        };
        Ok(())
    }

    pub fn toggle_participant(&mut self, key: &PersonKey) -> Result<(), SelectionError> {
        let phase = self.state.phase();
        let SelectionState::PickingParticipants { people, selected } = &mut self.state else {
            return Err(invalid("ToggleParticipant", phase));
        };
        if !people.iter().any(|p| &p.key == key) {
            return Err(SelectionError::UnknownPerson(key.clone()));
        }
        if !selected.remove(key) {
            selected.insert(key.clone());
        }
        Ok(())
    }

    /// PickingParticipants -> Filtering. Participants keep catalog order.
    pub fn confirm_participants(&mut self) -> Result<(), SelectionError> {
        let participants: Vec<Participant> = match &self.state {
            SelectionState::PickingParticipants { people, selected } => {
                if selected.is_empty() {
                    return Err(SelectionError::NoOneSelected);
                }
                people
                    .iter()
                    .filter(|p| selected.contains(&p.key))
                    .cloned()
                    .map(Participant::new)
                    .collect()
            }
            other => return Err(invalid("ConfirmParticipants", other.phase())),
        };
        self.state = SelectionState::Filtering {
            participants,
            filter: RestaurantFilter::default(),
        };
        Ok(())
    }

    pub fn set_filter(&mut self, field: FilterField, value: &str) -> Result<(), SelectionError> {
        let phase = self.state.phase();
        let SelectionState::Filtering { filter, .. } = &mut self.state else {
            return Err(invalid("SetFilter", phase));
        };
        filter.set(field, value)?;
        Ok(())
    }

    /// Filtering -> Choosing over the restaurants matching the filter, or straight to
    /// Accepted when exactly one matches.
    pub fn confirm_filter(
        &mut self,
        restaurants: Vec<Restaurant>,
    ) -> Result<Option<Notice>, SelectionError> {
        let (participants, filter) = match &self.state {
            SelectionState::Filtering {
                participants,
                filter,
            } => (participants.clone(), filter.clone()),
            other => return Err(invalid("ConfirmFilter", other.phase())),
        };

        let mut candidates = filter.apply(restaurants);
        match candidates.len() {
            0 => Err(SelectionError::NoMatches),
            1 => {
                let restaurant = candidates.remove(0);
                self.state = SelectionState::Accepted {
                    participants,
                    restaurant,
                };
                Ok(Some(Notice::AutoAccepted))
            }
            _ => {
                self.state = SelectionState::Choosing {
                    participants,
                    filter,
                    candidates,
                };
                Ok(None)
            }
        }
    }

    /// Choosing -> VetoPending with a uniformly chosen candidate.
    pub fn random_choose(&mut self) -> Result<(), SelectionError> {
        let chosen = match &self.state {
            SelectionState::Choosing { candidates, .. } => {
                let index = pick_uniform(&mut self.rng, candidates.len())
                    .ok_or(SelectionError::NoMatches)?;
                candidates[index].clone()
            }
            other => return Err(invalid("RandomChoose", other.phase())),
        };
        if let SelectionState::Choosing {
            participants,
            filter,
            candidates,
        } = std::mem::take(&mut self.state)
        {
            self.state = SelectionState::VetoPending {
                participants,
                filter,
                candidates,
                chosen,
            };
        }
        Ok(())
    }

    /// VetoPending -> Accepted with the chosen restaurant.
    pub fn accept(&mut self) -> Result<(), SelectionError> {
        match std::mem::take(&mut self.state) {
            SelectionState::VetoPending {
                participants,
                chosen,
                ..
            } => {
                self.state = SelectionState::Accepted {
                    participants,
                    restaurant: chosen,
                };
                Ok(())
            }
            other => {
                let phase = other.phase();
                self.state = other;
                Err(invalid("Accept", phase))
            }
        }
    }

    /// A participant vetoes the chosen restaurant, which leaves the candidate set for good.
    ///
    /// - no candidates left: back to Filtering, every veto restored
    /// - one candidate left: Accepted with it
    /// - otherwise: a new uniform choice among the rest
    pub fn veto(&mut self, key: &PersonKey) -> Result<Option<Notice>, SelectionError> {
        let phase = self.state.phase();
        let SelectionState::VetoPending {
            participants,
            filter,
            candidates,
            chosen,
        } = &mut self.state
        else {
            return Err(invalid("Veto", phase));
        };

        if participants.iter().all(|p| p.vetoed) {
            return Err(SelectionError::NoVetoesLeft);
        }
        let participant = participants
            .iter_mut()
            .find(|p| p.key() == key)
            .ok_or_else(|| SelectionError::UnknownParticipant(key.clone()))?;
        if participant.vetoed {
            return Err(SelectionError::AlreadyVetoed(key.clone()));
        }

        participant.vetoed = true;
        candidates.retain(|c| c.key != chosen.key);

        match candidates.len() {
            0 => {
                let participants = participants
                    .drain(..)
                    .map(|p| Participant::new(p.person))
                    .collect();
                let filter = std::mem::take(filter);
                self.state = SelectionState::Filtering {
                    participants,
                    filter,
                };
                Ok(Some(Notice::CandidatesExhausted))
            }
            1 => {
                let restaurant = candidates.remove(0);
                let participants = std::mem::take(participants);
                self.state = SelectionState::Accepted {
                    participants,
                    restaurant,
                };
                Ok(Some(Notice::AutoAccepted))
            }
            n => {
                if let Some(index) = pick_uniform(&mut self.rng, n) {
                    *chosen = candidates[index].clone();
                }
                Ok(None)
            }
        }
    }

    /// Any state -> Idle.
    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
    }
}
