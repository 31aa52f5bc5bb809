use math::Quaternion;

/// Quaternions from the DMP are unit quaternions, anything further off than this is treated as a
/// corrupted packet.
pub const NORM_MIN: f32 = 0.9;
pub const NORM_MAX: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict
{
    Accepted(Quaternion),
    Rejected { norm: f32 },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

pub fn validate(candidate: Quaternion) -> Verdict {
    let norm = candidate.magnitude();
    // NaN fails both comparisons and is rejected too.
    if (NORM_MIN..=NORM_MAX).contains(&norm) {
        Verdict::Accepted(candidate)
    } else {
        Verdict::Rejected { norm }
    }
}
