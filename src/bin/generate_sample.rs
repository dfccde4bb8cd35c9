//! Writes a deterministic `pairs_with_predictions.csv` sample file so the
//! dashboard can be tried without running the upstream classifier.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// (claim, report, label, typical classifier confidence for such pairs)
const TEMPLATES: &[(&str, &str, &str, f64)] = &[
    (
        "All government schools will receive free textbooks before the academic year",
        "Textbook deliveries completed in every surveyed school by mid-June",
        "Fulfilled",
        0.86,
    ),
    (
        "Every village will have piped drinking water by the end of the year",
        "Four of ten surveyed villages still rely on tanker deliveries",
        "Unfulfilled",
        0.81,
    ),
    (
        "Rural health centres will be staffed with at least one doctor",
        "Doctor present on all visit days at the sampled health centres",
        "Fulfilled",
        0.78,
    ),
    (
        "All highways will be pothole-free before the monsoon",
        "Resurfacing finished on two stretches; three others untouched",
        "Unfulfilled",
        0.74,
    ),
    (
        "Streetlights will be installed on every municipal road",
        "Installation records exist but field verification was inconclusive",
        "Neutral / Unclear",
        0.52,
    ),
    (
        "Farmers will receive crop insurance payouts within 30 days",
        "Payout timelines varied widely; several claims remain under review",
        "Neutral / Unclear",
        0.48,
    ),
    (
        "Midday meals will be served in all primary schools every working day",
        "Meals served daily at each school visited during the audit",
        "Fulfilled",
        0.89,
    ),
    (
        "Public hospitals will provide free generic medicines",
        "Pharmacy stock-outs reported for a third of the essential list",
        "Unfulfilled",
        0.77,
    ),
];

const DISTRICTS: &[&str] = &[
    "Northfield", "Lakeview", "Haranpur", "Westvale", "Kothagiri", "Eastbrook",
];

const OUTPUT_PATH: &str = "pairs_with_predictions.csv";

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    writer
        .write_record(["claim_text", "report_text", "predicted_label", "confidence"])
        .context("writing header")?;

    let mut rows = 0usize;
    for district in DISTRICTS {
        for (claim, report, label, typical_confidence) in TEMPLATES {
            let confidence = rng
                .gauss(*typical_confidence, 0.08)
                .clamp(0.05, 0.99);

            writer
                .write_record([
                    format!("{claim} ({district} district)").as_str(),
                    format!("{district}: {report}").as_str(),
                    label,
                    format!("{confidence:.4}").as_str(),
                ])
                .with_context(|| format!("writing row {rows}"))?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {rows} claim/report pairs to {OUTPUT_PATH}");
    Ok(())
}
