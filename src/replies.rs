/// Reply regions keyed by (post, comment), tied to the panel that created them

use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use crate::controller::{PanelState, ReplyState, ReplyTarget};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReplyBoard {
    epoch: u64,
    regions: HashMap<ReplyTarget, ReplyState>,
}

pub enum ReplyAction {
    /// The results panel was cleared; every region goes away
    Clear,
    Update {
        epoch: u64,
        target: ReplyTarget,
        state: ReplyState,
    },
}

impl ReplyAction {
    /// What a results-panel transition does to the reply regions.
    /// Loading wipes the previous results, so their regions go too.
    pub fn for_panel(state: &PanelState) -> Option<Self> {
        state.is_loading().then_some(ReplyAction::Clear)
    }
}

impl ReplyBoard {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn get(&self, target: ReplyTarget) -> Option<&ReplyState> {
        self.regions.get(&target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Apply an action; returns false when it was a stale update and got dropped
    pub fn apply(&mut self, action: ReplyAction) -> bool {
        match action {
            ReplyAction::Clear => {
                self.epoch += 1;
                self.regions.clear();
                true
            }
            ReplyAction::Update {
                epoch,
                target,
                state,
            } => {
                if epoch != self.epoch {
                    log::debug!(
                        "Dropping reply for {:?}: panel epoch {} is gone (now {})",
                        target,
                        epoch,
                        self.epoch
                    );
                    return false;
                }
                self.regions.insert(target, state);
                true
            }
        }
    }
}

impl Reducible for ReplyBoard {
    type Action = ReplyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = (*self).clone();
        if board.apply(action) {
            Rc::new(board)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generating() -> ReplyState {
        ReplyState::Generating("Generating reply...".to_string())
    }

    #[test]
    fn test_update_in_current_epoch() {
        let mut board = ReplyBoard::default();
        let target = ReplyTarget::Comment { post: 1, comment: 3 };

        assert!(board.apply(ReplyAction::Update {
            epoch: board.epoch(),
            target,
            state: generating(),
        }));

        assert_eq!(board.get(target), Some(&generating()));
        assert_eq!(board.get(ReplyTarget::Comment { post: 3, comment: 1 }), None);
        assert_eq!(board.get(ReplyTarget::MainPost { post: 1 }), None);
    }

    #[test]
    fn test_last_writer_wins_within_epoch() {
        let mut board = ReplyBoard::default();
        let target = ReplyTarget::MainPost { post: 0 };

        board.apply(ReplyAction::Update {
            epoch: 0,
            target,
            state: ReplyState::Failed("first".to_string()),
        });
        board.apply(ReplyAction::Update {
            epoch: 0,
            target,
            state: ReplyState::Failed("second".to_string()),
        });

        assert_eq!(board.len(), 1);
        assert_eq!(board.get(target), Some(&ReplyState::Failed("second".to_string())));
    }

    #[test]
    fn test_clear_drops_regions_and_stale_updates() {
        let mut board = ReplyBoard::default();
        let target = ReplyTarget::Comment { post: 0, comment: 0 };
        let started_in = board.epoch();

        board.apply(ReplyAction::Update {
            epoch: started_in,
            target,
            state: generating(),
        });
        board.apply(ReplyAction::Clear);

        assert!(board.is_empty());
        assert_eq!(board.epoch(), started_in + 1);

        let applied = board.apply(ReplyAction::Update {
            epoch: started_in,
            target,
            state: ReplyState::Failed("late".to_string()),
        });

        assert!(!applied);
        assert!(board.is_empty());
    }

    #[test]
    fn test_loading_panel_clears_regions_and_fences_late_replies() {
        let mut board = ReplyBoard::default();
        let started_in = board.epoch();
        let main = ReplyTarget::MainPost { post: 0 };
        let comment = ReplyTarget::Comment { post: 0, comment: 1 };
        board.apply(ReplyAction::Update { epoch: started_in, target: main, state: generating() });
        board.apply(ReplyAction::Update { epoch: started_in, target: comment, state: generating() });
        assert_eq!(board.len(), 2);

        if let Some(action) = ReplyAction::for_panel(&PanelState::Loading) {
            board.apply(action);
        }

        assert!(board.is_empty());
        assert!(!board.apply(ReplyAction::Update {
            epoch: started_in,
            target: main,
            state: ReplyState::Failed("late".to_string()),
        }));
        assert_eq!(board.get(main), None);
    }

    #[test]
    fn test_settled_panel_keeps_regions() {
        assert!(ReplyAction::for_panel(&PanelState::Idle).is_none());
        assert!(ReplyAction::for_panel(&PanelState::Error("x".to_string())).is_none());
        assert!(matches!(
            ReplyAction::for_panel(&PanelState::Loading),
            Some(ReplyAction::Clear)
        ));
    }

    #[test]
    fn test_reducer_keeps_same_rc_for_stale_update() {
        let board = Rc::new(ReplyBoard::default()).reduce(ReplyAction::Clear);

        let reduced = board.clone().reduce(ReplyAction::Update {
            epoch: 0,
            target: ReplyTarget::MainPost { post: 0 },
            state: generating(),
        });

        assert!(Rc::ptr_eq(&board, &reduced));
    }
}
