//! Session state. Each variant carries only the data that is valid in that phase.

use super::filter::RestaurantFilter;
use crate::model::{Person, PersonKey, Restaurant};
use std::collections::HashSet;
use std::fmt::Display;

/// A person taking part in one session. The veto flag never reaches the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub person: Person,
    pub vetoed: bool,
}

impl Participant {
    pub fn new(person: Person) -> Self {
        Self {
            person,
            vetoed: false,
        }
    }

    pub fn key(&self) -> &PersonKey {
        &self.person.key
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.person.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PickingParticipants,
    Filtering,
    Choosing,
    VetoPending,
    Accepted,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Idle => "Idle",
            Phase::PickingParticipants => "PickingParticipants",
            Phase::Filtering => "Filtering",
            Phase::Choosing => "Choosing",
            Phase::VetoPending => "VetoPending",
            Phase::Accepted => "Accepted",
        })
    }
}

/// Something the workflow decided on its own during a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Only one candidate was left, so it was accepted without a further choice.
    AutoAccepted,
    /// A veto removed the last candidate. The session is back to filtering with every
    /// participant's veto restored.
    CandidatesExhausted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Idle,
    PickingParticipants {
        people: Vec<Person>,
        selected: HashSet<PersonKey>,
    },
    Filtering {
        participants: Vec<Participant>,
        filter: RestaurantFilter,
    },
    Choosing {
        participants: Vec<Participant>,
        filter: RestaurantFilter,
        candidates: Vec<Restaurant>,
    },
    VetoPending {
        participants: Vec<Participant>,
        filter: RestaurantFilter,
        candidates: Vec<Restaurant>,
        chosen: Restaurant,
    },
    Accepted {
        participants: Vec<Participant>,
        restaurant: Restaurant,
    },
}

impl SelectionState {
    pub fn phase(&self) -> Phase {
        match self {
            SelectionState::Idle => Phase::Idle,
            SelectionState::PickingParticipants { .. } => Phase::PickingParticipants,
            SelectionState::Filtering { .. } => Phase::Filtering,
            SelectionState::Choosing { .. } => Phase::Choosing,
            SelectionState::VetoPending { .. } => Phase::VetoPending,
            SelectionState::Accepted { .. } => Phase::Accepted,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        match self {
            SelectionState::Filtering { participants, .. }
            | SelectionState::Choosing { participants, .. }
            | SelectionState::VetoPending { participants, .. }
            | SelectionState::Accepted { participants, .. } => participants,
            SelectionState::Idle | SelectionState::PickingParticipants { .. } => &[],
        }
    }

    /// True while a choice is pending and at least one participant has a veto left.
    pub fn veto_available(&self) -> bool {
        match self {
            SelectionState::VetoPending { participants, .. } => {
                participants.iter().any(|p| !p.vetoed)
            }
            _ => false,
        }
    }

    /// Render the state for the presentation layer.
    pub fn view(&self, notice: Option<Notice>) -> SelectionView {
        let mut view = SelectionView {
            phase: self.phase(),
            people: Vec::new(),
            participants: self.participants().to_vec(),
            filter: None,
            candidate_count: 0,
            chosen: None,
            accepted: None,
            veto_available: self.veto_available(),
            notice,
        };
        match self {
            SelectionState::Idle => {}
            SelectionState::PickingParticipants { people, selected } => {
                view.people = people
                    .iter()
                    .map(|p| (p.clone(), selected.contains(&p.key)))
                    .collect();
            }
            SelectionState::Filtering { filter, .. } => {
                view.filter = Some(filter.clone());
            }
            SelectionState::Choosing {
                filter, candidates, ..
            } => {
                view.filter = Some(filter.clone());
                view.candidate_count = candidates.len();
            }
            SelectionState::VetoPending {
                filter,
                candidates,
                chosen,
                ..
            } => {
                view.filter = Some(filter.clone());
                view.candidate_count = candidates.len();
                view.chosen = Some(chosen.clone());
            }
            SelectionState::Accepted { restaurant, .. } => {
                view.accepted = Some(restaurant.clone());
            }
        }
        view
    }
}

/// What the presentation layer needs to draw the current step of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub phase: Phase,
    /// While picking participants: every person and whether they are selected.
    pub people: Vec<(Person, bool)>,
    pub participants: Vec<Participant>,
    pub filter: Option<RestaurantFilter>,
    pub candidate_count: usize,
    /// The restaurant awaiting vetoes.
    pub chosen: Option<Restaurant>,
    pub accepted: Option<Restaurant>,
    pub veto_available: bool,
    /// Set when the transition that produced this view decided something on its own.
    pub notice: Option<Notice>,
}

impl SelectionView {
    /// Label for the veto button: "No Vetoes Left" once nobody can veto.
    pub fn veto_label(&self) -> &'static str {
        if self.veto_available {
            "Veto"
        } else {
            "No Vetoes Left"
        }
    }
}
