#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

const ACTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShootDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ShootDirection {
    pub const ALL: [ShootDirection; 4] = [
        ShootDirection::Up,
        ShootDirection::Down,
        ShootDirection::Left,
        ShootDirection::Right,
    ];

    /// Unit step in screen axes: x grows right, y grows down.
    pub const fn vector(self) -> (i8, i8) {
        match self {
            ShootDirection::Up => (0, -1),
            ShootDirection::Down => (0, 1),
            ShootDirection::Left => (-1, 0),
            ShootDirection::Right => (1, 0),
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            ShootDirection::Up => 0,
            ShootDirection::Down => 1,
            ShootDirection::Left => 2,
            ShootDirection::Right => 3,
        }
    }
}

/// Shoot presses collected since the last snapshot, counted per direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ShotCounts {
    counts: [u32; 4],
}

impl ShotCounts {
    pub(crate) fn record(&mut self, direction: ShootDirection) {
        let slot = &mut self.counts[direction.index()];
        *slot = slot.saturating_add(1);
    }

    pub(crate) fn count(&self, direction: ShootDirection) -> u32 {
        self.counts[direction.index()]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = ShootDirection> + '_ {
        ShootDirection::ALL
            .into_iter()
            .flat_map(move |direction| (0..self.count(direction)).map(move |_| direction))
    }
}
