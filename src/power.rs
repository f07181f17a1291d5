use crate::error::{Error, ErrorKind};
use std::iter::FusedIterator;

/// Raises `base` to `exp` by multiplying an accumulator `exp` times.
///
/// The product wraps on overflow. A negative `exp` never enters the loop and
/// so yields 1, the same as an exponent of 0.
pub fn power(base: i32, mut exp: i32) -> i32 {
    let mut out: i32 = 1;
    while exp > 0 {
        out = out.wrapping_mul(base);
        exp -= 1;
    }
    out
}

/// Rejects negative exponents instead of letting [`power`] treat them as 0.
pub fn checked_exponent(exp: i32) -> Result<u32, Error> {
    if exp < 0 {
        Err(Error::msg(
            ErrorKind::NegativeExponent,
            format!("exponent must not be negative (got {})", exp),
        ))
    } else {
        Ok(exp as u32)
    }
}

/// Returns every state the multiplication loop in [`power`] passes through.
pub fn steps(base: i32, exp: i32) -> Steps {
    Steps {
        base,
        next: Some(Step {
            index: 0,
            accumulator: 1,
            remaining: exp,
        }),
    }
}

/// A single observed state of the multiplication loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Number of multiplications performed so far.
    pub index: u32,
    pub accumulator: i32,
    /// The exponent counter as it stands after `index` multiplications.
    pub remaining: i32,
}

impl Step {
    /// True when the loop guard fails and this is the final state.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.remaining <= 0
    }
}

#[derive(Clone)]
pub struct Steps {
    base: i32,
    next: Option<Step>,
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !current.is_last() {
            self.next = Some(Step {
                index: current.index + 1,
                accumulator: current.accumulator.wrapping_mul(self.base),
                remaining: current.remaining - 1,
            });
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .next
            .map(|step| step.remaining.max(0) as usize + 1)
            .unwrap_or(0);
        (len, Some(len))
    }
}

impl ExactSizeIterator for Steps {}
impl FusedIterator for Steps {}
