//! Greedy minimum travel cost.
//!
//! At each checkpoint the traveler pays the cheapest price seen so far,
//! so the total is `Σ distance[i] * min(price[0..=i])`. No checkpoint ever
//! benefits from paying more than that running minimum, hence the single
//! pass is optimal.

use crate::error::InputError;
use crate::input::Checkpoints;

/// Yields the smallest price among checkpoints `0..=i` for each `i`.
pub struct RunningMin<I> {
    prices: I,
    current: Option<u64>,
}

impl<I: Iterator<Item = u64>> Iterator for RunningMin<I> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let price = self.prices.next()?;
        let min_price = match self.current {
            Some(min_price) if min_price <= price => min_price,
            _ => price,
        };
        self.current = Some(min_price);
        Some(min_price)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.prices.size_hint()
    }
}

pub fn running_min<I>(prices: I) -> RunningMin<I::IntoIter>
where
    I: IntoIterator<Item = u64>,
{
    RunningMin {
        prices: prices.into_iter(),
        current: None,
    }
}

/// Computes the minimum total cost of traveling every checkpoint in order.
pub fn total_cost(checkpoints: &Checkpoints) -> Result<u64, InputError> {
    let min_prices = running_min(checkpoints.prices().iter().cloned());

    let mut total = 0u64;
    for (i, (&distance, min_price)) in checkpoints.distances().iter().zip(min_prices).enumerate() {
        trace!("checkpoint {}: distance {} at {}", i, distance, min_price);

        total = distance
            .checked_mul(min_price)
            .and_then(|cost| total.checked_add(cost))
            .ok_or(InputError::Overflow { checkpoint: i })?;
    }

    debug!("total cost over {} checkpoints: {}", checkpoints.len(), total);
    Ok(total)
}
