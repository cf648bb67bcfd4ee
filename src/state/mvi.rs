//! Intent, reducer and slice primitives.
//!
//! ```text
//! orchestrator ──Intent──→ Reducer ──→ slice ──→ selectors ──→ view
//! ```
//!
//! Every slice of [`RootState`](crate::state::RootState) is driven by one
//! reducer. Network calls and durable storage stay in the orchestrators.

/// A request lifecycle event or a local user action addressed to a slice.
pub trait Intent: Send + 'static {}

/// Plain data for one slice. Views read cloned snapshots and compare
/// them to skip redundant renders.
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}

/// Pure `(State, Intent) -> State` transition for one slice.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
