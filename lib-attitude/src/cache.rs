use math::{Acceleration, EulerAngle, Gravity, Rotation, YawPitchRoll};

/// A lazily computed value that stays valid until it is invalidated.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Memo<T>
{
    #[default]
    Stale,
    Computed(T),
}

impl<T: Copy> Memo<T>
{
    pub fn get(&self) -> Option<T> {
        match self {
            Memo::Stale => None,
            Memo::Computed(value) => Some(*value),
        }
    }

    pub fn get_or_compute(&mut self, compute: impl FnOnce() -> T) -> T {
        match *self {
            Memo::Computed(value) => value,
            Memo::Stale => {
                let value = compute();
                *self = Memo::Computed(value);
                value
            },
        }
    }

    pub fn invalidate(&mut self) {
        *self = Memo::Stale;
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Memo::Computed(_))
    }
}

/// Every quantity derived from one quaternion sample.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedCache
{
    pub rotation: Memo<Rotation>,
    pub euler: Memo<EulerAngle>,
    pub gravity: Memo<Gravity>,
    pub yaw_pitch_roll: Memo<YawPitchRoll>,
    pub linear_acceleration: Memo<Acceleration>,
    pub world_acceleration: Memo<Acceleration>,
}

impl DerivedCache
{
    pub fn invalidate_all(&mut self) {
        self.rotation.invalidate();
        self.euler.invalidate();
        self.gravity.invalidate();
        self.yaw_pitch_roll.invalidate();
        self.linear_acceleration.invalidate();
        self.world_acceleration.invalidate();
    }
}
