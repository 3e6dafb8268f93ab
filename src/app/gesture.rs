use eframe::egui::Pos2;

/// One continuous pointer-down → move → up interaction, modeled as an
/// explicit state machine so tool behavior does not depend on egui's event
/// plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Active {
        start: Pos2,
        current: Pos2,
    },
}

impl Gesture {
    /// Pointer pressed. Returns `true` on the Idle → Active transition; a
    /// press while already active is ignored.
    pub fn press(&mut self, pos: Pos2) -> bool {
        match self {
            Gesture::Idle => {
                *self = Gesture::Active {
                    start: pos,
                    current: pos,
                };
                true
            }
            Gesture::Active { .. } => false,
        }
    }

    /// Pointer moved while down. Returns the gesture start when active;
    /// drags while idle are ignored.
    pub fn drag(&mut self, pos: Pos2) -> Option<Pos2> {
        match self {
            Gesture::Idle => None,
            Gesture::Active { start, current } => {
                *current = pos;
                Some(*start)
            }
        }
    }

    /// Pointer released. Returns `(start, end)` on the Active → Idle
    /// transition so the caller can commit the gesture.
    pub fn release(&mut self, pos: Pos2) -> Option<(Pos2, Pos2)> {
        match *self {
            Gesture::Idle => None,
            Gesture::Active { start, .. } => {
                *self = Gesture::Idle;
                Some((start, pos))
            }
        }
    }

    /// Abandon the gesture without committing (e.g. tool switched mid-drag).
    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Gesture::Active { .. })
    }

    /// Start and current positions while active.
    pub fn span(&self) -> Option<(Pos2, Pos2)> {
        match *self {
            Gesture::Idle => None,
            Gesture::Active { start, current } => Some((start, current)),
        }
    }
}
