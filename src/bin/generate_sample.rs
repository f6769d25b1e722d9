use std::fmt::Write as _;

use anyhow::{Context, Result};
use peak_subtract::data::filter::filter;
use peak_subtract::data::model::Peak;

/// Common ESI contaminant ions (phthalates, polysiloxanes), m/z.
const CONTAMINANTS: [f64; 9] = [
    149.02332, 279.15909, 301.14103, 371.10124, 391.28429, 413.26623, 445.12003, 519.13882,
    536.16537,
];

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
}

/// Shift `mz` by `ppm` parts per million.
fn offset_ppm(mz: f64, ppm: f64) -> f64 {
    mz * (1.0 + ppm / 1e6)
}

fn to_text(peaks: &[Peak]) -> String {
    peaks.iter().fold(String::new(), |mut out, p| {
        let _ = writeln!(out, "{:.5} {:.1}", p.mz, p.intensity);
        out
    })
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Background run: contaminants plus some solvent noise the sample never sees.
    let mut background: Vec<Peak> = CONTAMINANTS
        .iter()
        .map(|&mz| Peak::new(mz, rng.uniform(2e4, 2e5)))
        .collect();
    for _ in 0..40 {
        background.push(Peak::new(rng.uniform(100.0, 1500.0), rng.uniform(500.0, 5000.0)));
    }

    // Sample run: analytes, contaminants seen again within a couple of ppm, and a
    // few near misses just outside the 5 ppm window.
    let mut sample: Vec<Peak> = (0..200)
        .map(|_| {
            let mz = rng.uniform(150.0, 1200.0);
            let intensity = rng.gauss(9.0, 1.2).exp();
            Peak::new(mz, intensity)
        })
        .collect();
    for &mz in &CONTAMINANTS {
        let jitter = rng.gauss(0.0, 1.0).clamp(-3.0, 3.0);
        sample.push(Peak::new(offset_ppm(mz, jitter), rng.uniform(1e4, 1e5)));
    }
    for &mz in CONTAMINANTS.iter().step_by(3) {
        sample.push(Peak::new(offset_ppm(mz, 9.0), rng.uniform(1e3, 1e4)));
    }
    sample.sort_by(|a, b| a.mz.total_cmp(&b.mz));

    let sample_text = to_text(&sample);
    let background_text = to_text(&background);

    let sample_path = "sample_peaks.txt";
    let background_path = "background_peaks.txt";
    std::fs::write(sample_path, &sample_text).with_context(|| format!("writing {sample_path}"))?;
    std::fs::write(background_path, &background_text)
        .with_context(|| format!("writing {background_path}"))?;

    let survivors = filter(&sample_text, &background_text).context("re-reading generated peaks")?;
    println!(
        "Wrote {} sample peaks to {sample_path} and {} background peaks to {background_path}; \
         {} survive 5 ppm subtraction",
        sample.len(),
        background.len(),
        survivors.len()
    );
    Ok(())
}
