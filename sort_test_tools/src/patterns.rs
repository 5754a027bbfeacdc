//! Input patterns for testing and benchmarking sorts, all over `i32`.
//!
//! Random patterns derive their generator from one seed per process, so a failing test can be
//! reproduced by setting `OVERRIDE_SEED` to the seed printed at the start of the run.

use std::env;
use std::sync::{Mutex, PoisonError};

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

/// Uniformly random over the whole `i32` range, so almost all values are distinct.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random within `range`, e.g. `0..=1` for a binary input.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    new_rng().sample_iter(dist).take(len).collect()
}

/// Values in `1..=len` following Zipf's law: a few small values make up most of the input.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf parameters, len: {len} exponent: {exponent}"),
    };

    new_rng()
        .sample_iter(dist)
        .take(len)
        .map(|val: usize| val as i32)
        .collect()
}

/// Random values whose first `sorted_percent` percent are already in ascending order.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix = ((len as f64) * sorted_percent / 100.0).round() as usize;

    v[..prefix.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` ascending runs of random values.
pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| Direction::Ascending)
}

/// `saw_count` descending runs of random values.
pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    saws(len, saw_count, |_| Direction::Descending)
}

/// `saw_count` runs of random values, each ascending or descending at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saws(len, saw_count, |i| Direction::from_bit(directions[i]))
}

/// Runs with random direction and a random length drawn from `run_lens`.
pub fn saw_mixed_range(len: usize, run_lens: std::ops::Range<usize>) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);

    let max_runs = len / run_lens.start.max(1) + 1;
    let directions = random_uniform(max_runs, 0..=1);
    let lens = random_uniform(max_runs, (run_lens.start as i32)..(run_lens.end as i32));

    let mut start = 0;
    for (direction, run_len) in directions.into_iter().zip(lens) {
        if start >= len {
            break;
        }

        let end = (start + run_len as usize).min(len);
        Direction::from_bit(direction).apply(&mut v[start..end]);
        start = end;
    }

    v
}

/// An ascending half followed by a descending half, peaking in the middle.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);

    let (rising, falling) = v.split_at_mut(len / 2);
    Direction::Ascending.apply(rising);
    Direction::Descending.apply(falling);

    v
}

/// Makes every later call to a random pattern draw a fresh seed.
///
/// By default the seed is fixed for the whole process, which keeps tests reproducible but makes
/// benchmarks measure the same input over and over. Panics if `OVERRIDE_SEED` is set, since the
/// two contradict each other.
pub fn use_random_seed_each_time() {
    if let Seed::Override(seed) = current_seed() {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED={seed}");
    }

    *lock_seed() = Some(Seed::Fresh);
}

/// The seed the next random pattern will use.
pub fn random_init_seed() -> u64 {
    match current_seed() {
        Seed::PerProcess(seed) | Seed::Override(seed) => seed,
        Seed::Fresh => thread_rng().gen(),
    }
}

// --- Private ---

#[derive(Copy, Clone)]
enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn from_bit(bit: i32) -> Self {
        if bit == 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    fn apply(self, run: &mut [i32]) {
        match self {
            Self::Ascending => run.sort_unstable(),
            Self::Descending => run.sort_unstable_by(|a, b| b.cmp(a)),
        }
    }
}

fn saws(len: usize, saw_count: usize, direction: impl Fn(usize) -> Direction) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let saw_count = saw_count.max(1);
    let mut v = random(len);
    let saw_len = (len / saw_count).max(1);

    for (i, saw) in v.chunks_mut(saw_len).enumerate() {
        // A short remainder run shares the direction of the last full saw.
        direction(i.min(saw_count)).apply(saw);
    }

    v
}

#[derive(Copy, Clone)]
enum Seed {
    PerProcess(u64),
    Override(u64),
    Fresh,
}

static SEED: Mutex<Option<Seed>> = Mutex::new(None);

fn lock_seed() -> std::sync::MutexGuard<'static, Option<Seed>> {
    // A test that panicked while holding the lock leaves the seed itself intact.
    SEED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn current_seed() -> Seed {
    *lock_seed().get_or_insert_with(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => match seed.parse() {
            Ok(seed) => Seed::Override(seed),
            Err(_) => panic!("OVERRIDE_SEED must be a u64, got {seed:?}"),
        },
        Err(_) => Seed::PerProcess(thread_rng().gen()),
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
