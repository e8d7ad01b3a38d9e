//=========================================================================
// Transition Queue
//
// Scene changes requested from inside `update` (the level asking for the
// game-over screen, the game-over screen asking for a restart). They are
// only recorded here; the scene manager applies them once the update
// that asked for them has returned.
//
//=========================================================================

use super::{SceneKey, SceneTransition};

//=== TransitionQueue =====================================================

/// Requested transitions, oldest first.
pub struct TransitionQueue<S: SceneKey> {
    pending: Vec<SceneTransition<S>>,
}

impl<S: SceneKey> TransitionQueue<S> {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    pub fn push(&mut self, transition: SceneTransition<S>) {
        self.pending.push(transition);
    }

    /// Requests that `key` replace the active scene.
    pub fn start(&mut self, key: S) {
        self.push(SceneTransition::Start(key));
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneTransition<S>> {
        self.pending.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Hands the current requests to the caller. Anything pushed while
    /// those are being applied (a `create` hook asking for another scene)
    /// waits for the next tick.
    pub fn take(&mut self) -> Vec<SceneTransition<S>> {
        std::mem::take(&mut self.pending)
    }
}

impl<S: SceneKey> Default for TransitionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum Screen {
        Level,
        GameOver,
    }

    impl SceneKey for Screen {}

    #[test]
    fn requests_keep_their_order() {
        let mut queue = TransitionQueue::default();
        queue.start(Screen::GameOver);
        queue.push(SceneTransition::Stop);
        queue.start(Screen::Level);

        assert_eq!(queue.len(), 3);
        assert_eq!(
            queue.iter().copied().collect::<Vec<_>>(),
            vec![
                SceneTransition::Start(Screen::GameOver),
                SceneTransition::Stop,
                SceneTransition::Start(Screen::Level),
            ]
        );
    }

    #[test]
    fn take_empties_and_later_pushes_wait() {
        let mut queue = TransitionQueue::new();
        queue.start(Screen::GameOver);

        let applied = queue.take();
        queue.start(Screen::Level);

        assert_eq!(applied, vec![SceneTransition::Start(Screen::GameOver)]);
        assert_eq!(queue.take(), vec![SceneTransition::Start(Screen::Level)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_drops_requests() {
        let mut queue = TransitionQueue::new();
        queue.start(Screen::Level);
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
