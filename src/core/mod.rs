//! Game-independent engine: PRNG, input gate and the session state machine.

pub mod constants;
pub mod input;
pub mod rng;
pub mod session;

pub use constants::*;
pub use input::{Command, Debouncer, Direction};
pub use rng::Xorshift32;
pub use session::{
    run_session, ArcadeGame, Session, SessionEvent, SessionState, StepOutcome, Transition,
};
