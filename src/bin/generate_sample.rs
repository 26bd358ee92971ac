use std::f64::consts::PI;

use anyhow::{Context, Result};

/// SplitMix64: enough to jitter sample times reproducibly.
struct Jitter(u64);

impl Jitter {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        // top 53 bits → [0, 1)
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Sum of three sines: (frequency in Hz, amplitude).
const COMPONENTS: [(f64, f64); 3] = [(0.5, 1.0), (2.0, 0.6), (5.0, 0.3)];

fn signal(t: f64) -> f64 {
    COMPONENTS
        .iter()
        .map(|&(freq, amp)| amp * (2.0 * PI * freq * t).sin())
        .sum()
}

/// Times on (0, `span`], `n` of them, each jittered within its nominal slot so
/// the sequence stays strictly increasing and avoids t = 0.
fn jittered_times(n: usize, span: f64, jitter: &mut Jitter) -> Vec<f64> {
    let slot = span / n as f64;
    (0..n)
        .map(|i| (i as f64 + 0.1 + 0.8 * jitter.next_unit()) * slot)
        .collect()
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "threesines.txt".to_string());

    let times = jittered_times(2000, 20.0, &mut Jitter(42));

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    for &t in &times {
        writer
            .write_record([t.to_string(), signal(t).to_string()])
            .context("writing sample")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} nonuniform samples to {output_path}", times.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_are_strictly_increasing_and_positive() {
        let times = jittered_times(500, 5.0, &mut Jitter(7));
        assert_eq!(times.len(), 500);
        assert!(times[0] > 0.0);
        assert!(times.windows(2).all(|w| w[1] > w[0]));
        assert!(*times.last().unwrap() <= 5.0);
    }

    #[test]
    fn same_seed_same_times() {
        assert_eq!(
            jittered_times(10, 1.0, &mut Jitter(3)),
            jittered_times(10, 1.0, &mut Jitter(3))
        );
    }
}
