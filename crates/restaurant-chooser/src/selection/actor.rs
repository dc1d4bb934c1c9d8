//! # Selection Actor
//!
//! Owns the session's [`SelectionMachine`] in its own task. Events are processed strictly
//! one at a time: a catalog read needed by a transition completes before the next event is
//! taken, so a session never sees a half-applied transition.

use super::error::SelectionError;
use super::machine::{SelectionEvent, SelectionMachine};
use super::state::SelectionView;
use crate::clients::{ActorClient, PeopleClient, RestaurantClient};
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

type Response<T> = oneshot::Sender<Result<T, SelectionError>>;

#[derive(Debug)]
pub enum SelectionRequest {
    Dispatch {
        event: SelectionEvent,
        respond_to: Response<SelectionView>,
    },
    View {
        respond_to: oneshot::Sender<SelectionView>,
    },
}

pub struct SelectionActor {
    receiver: mpsc::Receiver<SelectionRequest>,
    machine: SelectionMachine,
}

impl SelectionActor {
    /// Creates the actor and its client. `rng` drives every random choice of the session.
    pub fn new(buffer_size: usize, rng: StdRng) -> (Self, SelectionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            machine: SelectionMachine::new(rng),
        };
        (actor, SelectionClient { sender })
    }

    /// Runs the event loop. The catalog clients are injected here rather than in `new`, so
    /// the catalogs can be created and started independently.
    pub async fn run(mut self, context: (PeopleClient, RestaurantClient)) {
        let (people, restaurants) = context;
        info!(phase = %self.machine.state().phase(), "Selection actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SelectionRequest::Dispatch { event, respond_to } => {
                    debug!(?event, "Dispatch");
                    let from = self.machine.state().phase();
                    let name = event.name();
                    let result = self.handle(event, &people, &restaurants).await;
                    match &result {
                        Ok(view) => info!(
                            event = name,
                            %from,
                            to = %view.phase,
                            notice = ?view.notice,
                            "Transition"
                        ),
                        Err(e) => warn!(event = name, phase = %from, error = %e, "Event rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                SelectionRequest::View { respond_to } => {
                    let _ = respond_to.send(self.machine.state().view(None));
                }
            }
        }

        info!(phase = %self.machine.state().phase(), "Shutdown");
    }

    async fn handle(
        &mut self,
        event: SelectionEvent,
        people: &PeopleClient,
        restaurants: &RestaurantClient,
    ) -> Result<SelectionView, SelectionError> {
        self.machine.check(&event)?;

        let notice = match event {
            SelectionEvent::StartSelection => {
                let everyone = people.list().await?;
                let restaurant_count = restaurants.list().await?.len();
                self.machine.start(everyone, restaurant_count)?;
                None
            }
            SelectionEvent::ToggleParticipant(key) => {
                self.machine.toggle_participant(&key)?;
                None
            }
            SelectionEvent::ConfirmParticipants => {
                self.machine.confirm_participants()?;
                None
            }
            SelectionEvent::SetFilter { field, value } => {
                self.machine.set_filter(field, &value)?;
                None
            }
            SelectionEvent::ConfirmFilter => {
                let current = restaurants.list().await?;
                self.machine.confirm_filter(current)?
            }
            SelectionEvent::RandomChoose => {
                self.machine.random_choose()?;
                None
            }
            SelectionEvent::Accept => {
                self.machine.accept()?;
                None
            }
            SelectionEvent::Veto(key) => self.machine.veto(&key)?,
            SelectionEvent::Reset => {
                self.machine.reset();
                None
            }
        };
        Ok(self.machine.state().view(notice))
    }
}

/// Client for interacting with the Selection actor.
#[derive(Clone)]
pub struct SelectionClient {
    sender: mpsc::Sender<SelectionRequest>,
}

impl SelectionClient {
    #[instrument(skip(self))]
    pub async fn dispatch(&self, event: SelectionEvent) -> Result<SelectionView, SelectionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SelectionRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| SelectionError::ActorCommunicationError("Actor closed".to_string()))?;
        response.await.map_err(|_| {
            SelectionError::ActorCommunicationError("Actor dropped response channel".to_string())
        })?
    }

    pub async fn view(&self) -> Result<SelectionView, SelectionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SelectionRequest::View { respond_to })
            .await
            .map_err(|_| SelectionError::ActorCommunicationError("Actor closed".to_string()))?;
        response.await.map_err(|_| {
            SelectionError::ActorCommunicationError("Actor dropped response channel".to_string())
        })
    }
}
