pub mod food_log;
pub mod generator;
pub mod plan;
pub mod profile;

/// Answer from whoever gates a destructive operation. Operations that remove
/// or replace data take one of these instead of asking the user themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    pub fn from_answer(yes: bool) -> Self {
        if yes { Self::Confirmed } else { Self::Declined }
    }

    pub fn is_confirmed(self) -> bool {
        self == Self::Confirmed
    }
}
