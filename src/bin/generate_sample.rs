//! Generates a synthetic frequency-calculation log for demos and manual
//! testing: a short header with an atom count, then normal modes emitted
//! three per block with frequency, IR intensity, and Raman activity rows.

use std::fmt::Write as _;

const ATOM_COUNT: usize = 12;
/// Non-linear molecule: 3N - 6 normal modes.
const MODE_COUNT: usize = 3 * ATOM_COUNT - 6;

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

fn main() {
    let mut rng = SimpleRng::new(42);
    let out_path = std::env::args().nth(1).unwrap_or_else(|| "sample.log".to_string());

    // Modes ascending across the usual mid-IR range.
    let mut frequencies: Vec<f64> = (0..MODE_COUNT)
        .map(|_| 200.0 + rng.next_f64() * 3600.0)
        .collect();
    frequencies.sort_by(|a, b| a.total_cmp(b));

    let ir_intensities: Vec<f64> = (0..MODE_COUNT)
        .map(|_| rng.gauss(20.0, 25.0).abs())
        .collect();
    let raman_activities: Vec<f64> = (0..MODE_COUNT)
        .map(|_| rng.gauss(15.0, 20.0).abs())
        .collect();
    let reduced_masses: Vec<f64> = (0..MODE_COUNT)
        .map(|_| 1.0 + rng.next_f64() * 11.0)
        .collect();

    let mut log = String::new();
    writeln!(log, " Entering Gaussian System, Link 0").unwrap();
    writeln!(log, " NAtoms=   {ATOM_COUNT} NActive=   {ATOM_COUNT}").unwrap();
    writeln!(log, " SCF Done:  E(RB3LYP) =  -230.778512345     A.U. after   11 cycles").unwrap();
    writeln!(
        log,
        " Harmonic frequencies (cm**-1), IR intensities (KM/Mole), Raman scattering"
    )
    .unwrap();
    writeln!(log, " activities (A**4/AMU), depolarization ratios for plane and unpolarized").unwrap();

    for (block, chunk) in frequencies.chunks(3).enumerate() {
        let base = block * 3;
        let indices: Vec<String> = (0..chunk.len())
            .map(|i| format!("{:>22}", base + i + 1))
            .collect();
        let symmetries: Vec<String> = chunk.iter().map(|_| format!("{:>22}", "A")).collect();
        writeln!(log, "{}", indices.join("")).unwrap();
        writeln!(log, "{}", symmetries.join("")).unwrap();
        write_row(&mut log, "Frequencies --", chunk);
        write_row(&mut log, "Red. masses --", &reduced_masses[base..base + chunk.len()]);
        write_row(&mut log, "IR Inten    --", &ir_intensities[base..base + chunk.len()]);
        write_row(&mut log, "Raman Activ --", &raman_activities[base..base + chunk.len()]);
    }

    writeln!(log, " Normal termination of Gaussian-style sample.").unwrap();

    std::fs::write(&out_path, log).expect("write sample log");
    println!("Wrote {out_path} ({MODE_COUNT} modes, {ATOM_COUNT} atoms)");
}

fn write_row(log: &mut String, label: &str, values: &[f64]) {
    let cells: Vec<String> = values.iter().map(|v| format!("{v:>18.4}")).collect();
    writeln!(log, " {label}{}", cells.join("    ")).unwrap();
}
