//! Generate deterministic stand-ins for the three exam data files so the
//! readers can be exercised without the originals:
//!
//! * `data_LargestPopulation.csv` – 63 years of population counts
//! * `data_SignalDetection.csv`   – 120000 signal-detection entries
//! * `data_DecayTimes.csv`        – 1000 decay times in seconds

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform draw from `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Exponential draw with the given mean.
    fn exponential(&mut self, mean: f64) -> f64 {
        -mean * self.next_f64().max(1e-15).ln()
    }
}

/// Logistic growth curve, in persons.
fn logistic(year: f64, capacity: f64, rate: f64, midpoint: f64) -> f64 {
    capacity / (1.0 + (-rate * (year - midpoint)).exp())
}

fn write_population(rng: &mut SimpleRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path("data_LargestPopulation.csv")
        .context("creating data_LargestPopulation.csv")?;
    writer.write_record(["Year", "PopIndia", "PopChina"])?;

    let years: Vec<i64> = (1960..=2022).collect();
    for &year in &years {
        let y = year as f64;
        let india = logistic(y, 1.75e9, 0.045, 2005.0) * rng.gauss(1.0, 0.002);
        let china = logistic(y, 1.48e9, 0.055, 1985.0) * rng.gauss(1.0, 0.002);
        writer.write_record([
            year.to_string(),
            format!("{:.0}", india),
            format!("{:.0}", china),
        ])?;
    }
    writer.flush()?;
    Ok(years.len())
}

fn write_signal_detection(rng: &mut SimpleRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path("data_SignalDetection.csv")
        .context("creating data_SignalDetection.csv")?;
    writer.write_record(["index", "P", "R", "nu", "type"])?;

    // 50000 control signal, 50000 control background, 20000 real data.
    let blocks: [(i64, usize); 3] = [(1, 50000), (0, 50000), (-1, 20000)];

    let mut index: i64 = 0;
    let mut total = 0usize;
    for &(entry_type, count) in &blocks {
        for _ in 0..count {
            // Real data is an unlabelled mixture of the two control shapes.
            let is_signal = match entry_type {
                1 => true,
                0 => false,
                _ => rng.next_f64() < 0.3,
            };
            let phase = rng.uniform(0.0, 2.0 * std::f64::consts::PI);
            let resonance = rng.gauss(1.0, 0.12);
            let frequency = if is_signal {
                rng.gauss(0.94, 0.01)
            } else {
                rng.uniform(0.85, 1.05)
            };
            writer.write_record([
                index.to_string(),
                format!("{:.4}", phase),
                format!("{:.4}", resonance),
                format!("{:.4}", frequency),
                entry_type.to_string(),
            ])?;
            index += 1;
            total += 1;
        }
    }
    writer.flush()?;
    Ok(total)
}

fn write_decay_times(rng: &mut SimpleRng) -> Result<usize> {
    let file = File::create("data_DecayTimes.csv").context("creating data_DecayTimes.csv")?;
    let mut writer = BufWriter::new(file);

    let count = 1000;
    for _ in 0..count {
        writeln!(writer, "{:.6}", rng.exponential(1.2))?;
    }
    writer.flush()?;
    Ok(count)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    let n_pop = write_population(&mut rng)?;
    let n_sig = write_signal_detection(&mut rng)?;
    let n_decay = write_decay_times(&mut rng)?;

    println!(
        "Wrote {n_pop} population rows, {n_sig} signal-detection rows, {n_decay} decay times"
    );
    Ok(())
}
